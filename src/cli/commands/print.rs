use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::report::{build_report, render_table, report_title};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::clock::Clock;
use crate::utils::time::resolve_cutoff;

/// Print the entries recorded after `--since` with the time spent on each.
pub fn handle(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let cutoff = resolve_cutoff(cli.since.as_deref(), clock)?;

    header(report_title(cutoff));

    let rows = build_report(&cfg.entries, cutoff);
    print!("{}", render_table(&rows));
    Ok(())
}
