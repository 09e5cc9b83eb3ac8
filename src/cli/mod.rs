pub mod args;
pub mod commands;
pub mod pager;
pub mod prompt;

pub use args::Cli;
pub use commands::{run, run_session};
pub use pager::display_raw_data;
pub use prompt::{collect_filters, Console};
