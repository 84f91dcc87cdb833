use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::time::format_duration;
use std::io;
use std::path::Path;

/// Record a new entry finished now.
pub fn handle(cli: &Cli, cfg: &mut Config, path: &Path, clock: &dyn Clock) -> AppResult<()> {
    let elapsed = TrackLogic::since_last_entry(cfg, clock);
    println!("{} since your last entry", format_duration(elapsed));

    let description = match cli.description() {
        Some(d) => d,
        None => TrackLogic::read_description(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    TrackLogic::record(cfg, path, &description, clock)?;
    success(format!("Saved {}", path.display()));
    Ok(())
}
