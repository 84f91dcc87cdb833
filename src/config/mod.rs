//! The entry store: the JSON file holding every recorded entry.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::ui::messages::info;
use crate::utils::clock::Clock;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(
        rename = "Entries",
        alias = "entries",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub entries: Vec<Entry>,
}

fn null_as_empty<'de, D>(d: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Entry>>::deserialize(d)?.unwrap_or_default())
}

impl Config {
    /// Load the store, creating an empty file when none exists yet.
    pub fn load(path: &Path) -> AppResult<Self> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info(format!("Creating config file {}", path.display()));
                Self::create(path)?;
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::load(e)),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %path.display(), "store file is empty");
            return Ok(Self::default());
        }

        let cfg = Self::parse(&data).map_err(AppError::load)?;
        debug!(path = %path.display(), entries = cfg.entries.len(), "store loaded");
        Ok(cfg)
    }

    /// Accepts `{"Entries": [...]}`, a bare array of entries, or `null`.
    fn parse(data: &[u8]) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Array(_) => Ok(Self {
                entries: serde_json::from_value(value)?,
            }),
            _ => serde_json::from_value(value),
        }
    }

    fn create(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(AppError::CreateConfig)?;
        }
        fs::File::create(path).map_err(AppError::CreateConfig)?;
        Ok(())
    }

    /// Rewrite the whole file with the current entries.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let data = serde_json::to_vec(self).map_err(AppError::write)?;
        fs::write(path, data).map_err(AppError::write)?;
        debug!(path = %path.display(), entries = self.entries.len(), "store saved");
        Ok(())
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Latest `finished` timestamp, or the clock's current time when empty.
    pub fn last_entry_time(&self, clock: &dyn Clock) -> DateTime<FixedOffset> {
        self.entries
            .iter()
            .map(|e| e.finished)
            .max()
            .unwrap_or_else(|| clock.now().fixed_offset())
    }
}
