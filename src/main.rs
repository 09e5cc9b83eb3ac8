use anyhow::Context;
use bikeshare_explorer::cli::{run, Cli};
use bikeshare_explorer::utils::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the flag
    let default_filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    run(cli).context("bikeshare session failed")?;
    Ok(())
}
