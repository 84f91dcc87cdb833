use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// One recorded task completion.
///
/// Serialized with the capitalised keys used by existing `.timetrack.json`
/// files; lowercase keys are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Finished", alias = "finished")]
    pub finished: DateTime<FixedOffset>,

    #[serde(rename = "Description", alias = "description")]
    pub description: String,
}

impl Entry {
    pub fn new(finished: DateTime<Local>, description: impl Into<String>) -> Self {
        Self {
            finished: finished.fixed_offset(),
            description: description.into(),
        }
    }
}
