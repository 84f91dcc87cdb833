#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn tt() -> Command {
    let mut cmd = cargo_bin_cmd!("timetrack");
    cmd.env_remove("TIMETRACK_FILE").env_remove("RUST_LOG");
    cmd
}

/// A fresh temp dir plus the path of an entry file inside it (not created).
pub fn setup_entry_file(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("{name}.timetrack.json"));
    (dir, path)
}

/// Write a store file holding the given `(rfc3339, description)` pairs.
pub fn write_entries(path: &Path, entries: &[(&str, &str)]) {
    let list: Vec<String> = entries
        .iter()
        .map(|(t, d)| format!(r#"{{"Finished":"{t}","Description":"{d}"}}"#))
        .collect();
    fs::write(path, format!(r#"{{"Entries":[{}]}}"#, list.join(","))).expect("write store");
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let data = fs::read_to_string(path).expect("read store");
    serde_json::from_str(&data).expect("valid json")
}
