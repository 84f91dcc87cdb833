use crate::utils::path::DEFAULT_FILE;
use clap::Parser;
use std::ffi::OsString;

/// Command-line interface definition for timetrack
#[derive(Parser, Debug)]
#[command(
    name = "timetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record what you just finished and see how long each task took",
    long_about = None
)]
pub struct Cli {
    /// Override the entry file (useful for tests or a second log)
    #[arg(long = "file", env = "TIMETRACK_FILE", default_value = DEFAULT_FILE)]
    pub file: String,

    /// Print the recorded entries instead of adding a new one
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Limits by date the records to print, e.g. Jan-02 or 2024-01-02 [default: yesterday]
    #[arg(short = 's', long = "since", requires = "print")]
    pub since: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Task description; prompted for when omitted
    #[arg(conflicts_with_all = ["print", "since"])]
    pub description: Vec<String>,
}

/// Long flags that also accept the single-dash spelling (`-print`, `-since=Jan-02`).
const SINGLE_DASH_FLAGS: [&str; 2] = ["print", "since"];

/// Rewrite `-print` / `-since` into their `--` form. Tokens after a bare `--`
/// are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut flags_done = false;

    for arg in args {
        if flags_done {
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let body = s.strip_prefix('-').filter(|b| !b.starts_with('-'))?;
            let name = body.split_once('=').map_or(body, |(n, _)| n);
            SINGLE_DASH_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{s}")))
        });

        if arg == "--" {
            flags_done = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Description words joined back together, if any were given.
    pub fn description(&self) -> Option<String> {
        let d = self.description.join(" ");
        let d = d.trim();
        (!d.is_empty()).then(|| d.to_string())
    }
}
