use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(about = "Interactive explorer for US bike-share trip data")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory holding chicago.csv, new_york_city.csv and washington.csv"
    )]
    pub data_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the loading spinner")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bikeshare"]);
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["bikeshare", "--data-dir", "/srv/bikeshare", "-v", "-q"]);
        assert_eq!(cli.data_dir, PathBuf::from("/srv/bikeshare"));
        assert!(cli.verbose);
        assert!(cli.quiet);
    }
}
