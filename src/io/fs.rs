//! Thin wrappers over `std::fs` that attach the path and operation to errors

use crate::error::{FmanError, Operation, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Outcome of probing a path for an existing filesystem entry
#[derive(Debug)]
pub enum Existence {
    /// Something (file, directory, symlink, ...) is at the path
    Exists,
    /// Nothing is at the path
    Absent,
    /// The probe failed for a reason other than "does not exist"
    Indeterminate(io::Error),
}

impl Existence {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Exists)
    }

    /// Turn an indeterminate probe into an error, otherwise report presence
    pub fn into_result(self, path: &Path) -> Result<bool> {
        match self {
            Self::Exists => Ok(true),
            Self::Absent => Ok(false),
            Self::Indeterminate(source) => Err(FmanError::existence_unknown(path, source)),
        }
    }
}

/// Probe `path` without following a trailing symlink.
///
/// A dangling symlink is reported as [`Existence::Exists`].
pub fn probe(path: &Path) -> Existence {
    match fs::symlink_metadata(path) {
        Ok(_) => Existence::Exists,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Existence::Absent,
        Err(e) => Existence::Indeterminate(e),
    }
}

pub fn open(path: &Path) -> Result<fs::File> {
    fs::File::open(path).map_err(|e| FmanError::from_io(path, Operation::Open, e))
}

pub fn create(path: &Path) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| FmanError::from_io(path, Operation::Create, e))
}

/// Remove whatever is at `path`. Directories are removed only when empty.
pub fn remove(path: &Path) -> Result<()> {
    let is_dir = fs::symlink_metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false);
    let removed = if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| FmanError::from_io(path, Operation::Remove, e))
}

/// Modification time of an already opened file
pub fn modified(file: &fs::File, path: &Path) -> Result<SystemTime> {
    file.metadata()
        .and_then(|m| m.modified())
        .map_err(|e| FmanError::from_io(path, Operation::Stat, e))
}

/// Modification time of the entry at `path`, without following a trailing symlink
pub fn entry_modified(path: &Path) -> Result<SystemTime> {
    fs::symlink_metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| FmanError::from_io(path, Operation::Stat, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();

        assert!(probe(&path).exists());
        assert!(probe(dir.path()).exists());
    }

    #[test]
    fn test_probe_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let existence = probe(&path);
        assert!(matches!(existence, Existence::Absent));
        assert!(!existence.into_result(&path).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_through_regular_file_is_indeterminate() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let path = file.join("child.txt");

        let existence = probe(&path);
        assert!(matches!(existence, Existence::Indeterminate(_)));

        let err = existence.into_result(&path).unwrap_err();
        assert!(matches!(err, FmanError::ExistenceUnknown { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_dangling_symlink_exists() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        assert!(probe(&link).exists());
    }

    #[test]
    fn test_open_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = open(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_file_and_empty_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        let sub = dir.path().join("sub");
        fs::write(&file, "x").unwrap();
        fs::create_dir(&sub).unwrap();

        remove(&file).unwrap();
        remove(&sub).unwrap();

        assert!(matches!(probe(&file), Existence::Absent));
        assert!(matches!(probe(&sub), Existence::Absent));
    }

    #[test]
    fn test_modified_matches_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x").unwrap();

        let handle = open(&path).unwrap();
        let expected = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(modified(&handle, &path).unwrap(), expected);
        assert_eq!(entry_modified(&path).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_modified_of_dangling_symlink() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        let expected = fs::symlink_metadata(&link).unwrap().modified().unwrap();
        assert_eq!(entry_modified(&link).unwrap(), expected);
    }
}
