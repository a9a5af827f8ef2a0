use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of walking the ancestor chain looking for a marker directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The start directory or some ancestor contains the marker.
    Found,
    /// The chain was walked up to the filesystem root without a hit.
    NotFound,
    /// A directory listing failed at this level. The walk stops here, so
    /// a marker further up the chain stays undetected.
    Denied(PathBuf),
}

impl ScanOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Found)
    }
}

/// Walk upward from `start`, checking each level for a subdirectory named
/// `marker`. Symlinks are not followed when deciding what counts as a
/// directory.
pub fn contains_dir(start: &Path, marker: &str) -> ScanOutcome {
    let mut dir = start;
    loop {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("cannot list {}: {}", dir.display(), err);
                return ScanOutcome::Denied(dir.to_path_buf());
            }
        };

        for entry in entries.flatten() {
            if entry.file_name() == marker
                && entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
            {
                return ScanOutcome::Found;
            }
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return ScanOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_marker_in_start_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("_infra")).unwrap();

        assert_eq!(contains_dir(tmp.path(), "_infra"), ScanOutcome::Found);
    }

    #[test]
    fn test_marker_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("_infra")).unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(contains_dir(&deep, "_infra"), ScanOutcome::Found);
    }

    #[test]
    fn test_marker_absent() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();

        // The walk continues past the temp dir up to the real root; a
        // marker with this name should not exist anywhere above it.
        assert_eq!(
            contains_dir(&deep, "_infra-marker-that-does-not-exist"),
            ScanOutcome::NotFound
        );
    }

    #[test]
    fn test_plain_file_does_not_count() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_marker_f"), "not a directory").unwrap();

        assert_eq!(contains_dir(tmp.path(), "_marker_f"), ScanOutcome::NotFound);
    }

    #[test]
    fn test_unlistable_start_is_denied() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        assert_eq!(
            contains_dir(&missing, "_infra"),
            ScanOutcome::Denied(missing.clone())
        );
    }

    #[test]
    fn test_is_found() {
        assert!(ScanOutcome::Found.is_found());
        assert!(!ScanOutcome::NotFound.is_found());
        assert!(!ScanOutcome::Denied(PathBuf::from("/x")).is_found());
    }
}
