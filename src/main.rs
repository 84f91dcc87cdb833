//! timetrack main entrypoint.

use timetrack::run;
use timetrack::ui::messages;

fn main() {
    if let Err(e) = run() {
        tracing::debug!(error = ?e, "timetrack failed");
        messages::error(&e);
        std::process::exit(1);
    }
}
