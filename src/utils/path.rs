//! Path utilities: expand `~/` against the home directory.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "~/.timetrack.json";

/// Expand a leading `~/` using the given home directory.
/// Returns `None` when the path needs a home directory and none is known.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> Option<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => home.map(|h| h.join(rest)),
        None => Some(PathBuf::from(path)),
    }
}

/// Resolve a user supplied file name against the current user's home.
pub fn resolve_file_name(path: &str) -> AppResult<PathBuf> {
    let home = dirs::home_dir();
    expand_tilde(path, home.as_deref()).ok_or_else(|| AppError::HomeDir(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix() {
        let p = expand_tilde("~/.timetrack.json", Some(Path::new("/home/ada"))).unwrap();
        assert_eq!(p, PathBuf::from("/home/ada/.timetrack.json"));
    }

    #[test]
    fn leaves_other_paths_alone() {
        let p = expand_tilde("/tmp/x.json", None).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/x.json"));
        let p = expand_tilde("relative/~/x.json", None).unwrap();
        assert_eq!(p, PathBuf::from("relative/~/x.json"));
    }

    #[test]
    fn missing_home_is_none() {
        assert!(expand_tilde("~/x.json", None).is_none());
    }
}
