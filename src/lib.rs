//! timetrack library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::clock::{Clock, SystemClock};
use utils::logging::enable_logging;
use utils::path::resolve_file_name;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, path: &Path, clock: &dyn Clock) -> AppResult<()> {
    let mut cfg = Config::load(path)?;

    if cli.print {
        cli::commands::print::handle(cli, &cfg, clock)
    } else {
        cli::commands::track::handle(cli, &mut cfg, path, clock)
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse_args();
    enable_logging(cli.verbose);

    let path = resolve_file_name(&cli.file)?;
    tracing::debug!(path = %path.display(), "using entry file");

    dispatch(&cli, &path, &SystemClock)
}
