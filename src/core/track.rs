use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::utils::clock::Clock;
use chrono::TimeDelta;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

pub const PROMPT: &str = "Enter a task description:";

pub struct TrackLogic;

impl TrackLogic {
    /// Time elapsed since the most recent entry (zero for an empty store).
    pub fn since_last_entry(cfg: &Config, clock: &dyn Clock) -> TimeDelta {
        clock.now().fixed_offset() - cfg.last_entry_time(clock)
    }

    /// Prompt until a non-blank line is read. Fails on end of input.
    pub fn read_description<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<String> {
        loop {
            writeln!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(AppError::NoDescription);
            }

            let desc = line.trim_matches([' ', '\t', '\r', '\n']);
            if !desc.is_empty() {
                return Ok(desc.to_string());
            }
        }
    }

    /// Append an entry finished now and persist the store.
    pub fn record(
        cfg: &mut Config,
        path: &Path,
        description: &str,
        clock: &dyn Clock,
    ) -> AppResult<Entry> {
        let entry = Entry::new(clock.now(), description);
        cfg.push(entry.clone());
        cfg.save(path)?;

        info!(finished = %entry.finished, total = cfg.entries.len(), "entry recorded");
        Ok(entry)
    }
}
