use bikeshare_explorer::analyzers::{DurationAnalyzer, StationAnalyzer, TimeAnalyzer, UserAnalyzer};
use bikeshare_explorer::models::{DayFilter, Month, MonthFilter, TripRecord, TripTable};
use bikeshare_explorer::readers::TripReader;
use chrono::{NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Synthetic trips spread over the first half of 2017
fn create_test_table(trips: usize) -> TripTable {
    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let records = (0..trips)
        .map(|i| {
            let start = base + chrono::Duration::minutes((i as i64 * 37) % (181 * 24 * 60));
            TripRecord::new(
                i,
                start,
                60.0 + (i % 1800) as f64,
                format!("Station {}", i % 97),
                format!("Station {}", (i * 7) % 97),
            )
            .with_user_type(Some(if i % 5 == 0 { "Customer" } else { "Subscriber" }.to_string()))
            .with_gender(Some(if i % 3 == 0 { "Female" } else { "Male" }.to_string()))
            .with_birth_year(Some(1940.0 + (i % 60) as f64))
        })
        .collect();

    TripTable::new(records, true, true)
}

fn create_test_csv(trips: usize) -> String {
    let mut csv = String::from(
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for record in create_test_table(trips).records() {
        csv.push_str(&format!(
            "{},{},,{},{},{},Subscriber,Male,1980.0\n",
            record.row_index,
            record.start_time.format("%Y-%m-%d %H:%M:%S"),
            record.trip_duration,
            record.start_station,
            record.end_station
        ));
    }
    csv
}

fn benchmark_analyzers(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzers");

    for size in [1_000, 10_000, 100_000] {
        let table = create_test_table(size);

        group.bench_with_input(BenchmarkId::new("time", size), &table, |b, table| {
            b.iter(|| TimeAnalyzer::new().analyze(black_box(table)))
        });
        group.bench_with_input(BenchmarkId::new("station", size), &table, |b, table| {
            b.iter(|| StationAnalyzer::new().analyze(black_box(table)))
        });
        group.bench_with_input(BenchmarkId::new("duration", size), &table, |b, table| {
            b.iter(|| DurationAnalyzer::new().analyze(black_box(table)))
        });
        group.bench_with_input(BenchmarkId::new("user", size), &table, |b, table| {
            b.iter(|| UserAnalyzer::new().analyze(black_box(table)))
        });
    }

    group.finish();
}

fn benchmark_filtering(c: &mut Criterion) {
    let table = create_test_table(100_000);

    c.bench_function("filter_march_mondays", |b| {
        b.iter(|| {
            black_box(table.clone()).filtered(
                MonthFilter::Only(Month::March),
                DayFilter::Only(Weekday::Mon),
            )
        })
    });
}

fn benchmark_csv_reading(c: &mut Criterion) {
    let csv = create_test_csv(10_000);
    let reader = TripReader::new(".");

    c.bench_function("read_10k_trips", |b| {
        b.iter(|| reader.read_from(black_box(csv.as_bytes())).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_analyzers,
    benchmark_filtering,
    benchmark_csv_reading
);
criterion_main!(benches);
