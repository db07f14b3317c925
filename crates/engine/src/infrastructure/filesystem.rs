//! Search-path virtual filesystem.
//!
//! Virtual paths resolve against an ordered list of root directories; the
//! first root containing a path wins. Typical setup is the user directory
//! followed by the read-only game data directory.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::infrastructure::ports::{FileSystemError, FileSystemPort};

pub struct SearchPathFileSystem {
    roots: Vec<PathBuf>,
}

impl SearchPathFileSystem {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Turn a virtual path into a relative host path, rejecting anything
    /// that could escape a root.
    fn relative(path: &str) -> Result<PathBuf, FileSystemError> {
        let trimmed = path.trim_start_matches('/');
        let mut relative = PathBuf::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(FileSystemError::invalid_path(path));
                }
            }
        }
        Ok(relative)
    }

    /// First existing host path for `path`.
    fn locate(&self, path: &str) -> Result<Option<PathBuf>, FileSystemError> {
        let relative = Self::relative(path)?;
        Ok(self
            .roots
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.exists()))
    }
}

impl FileSystemPort for SearchPathFileSystem {
    fn exists(&self, path: &str) -> bool {
        match self.locate(path) {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::debug!(path, error = %e, "Existence check on invalid path");
                false
            }
        }
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, FileSystemError> {
        let host = self
            .locate(path)?
            .ok_or_else(|| FileSystemError::not_found(path))?;
        std::fs::read(&host).map_err(|e| FileSystemError::io(path, e))
    }

    fn list(&self, dir: &str) -> Result<Vec<String>, FileSystemError> {
        let relative = Self::relative(dir)?;
        let mut entries = BTreeSet::new();
        let mut found_any = false;

        for root in &self.roots {
            let host = root.join(&relative);
            if !host.is_dir() {
                continue;
            }
            found_any = true;
            let listing = std::fs::read_dir(&host).map_err(|e| FileSystemError::io(dir, e))?;
            for entry in listing {
                let entry = entry.map_err(|e| FileSystemError::io(dir, e))?;
                entries.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }

        if !found_any {
            return Err(FileSystemError::not_found(dir));
        }
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn two_roots() -> (tempfile::TempDir, tempfile::TempDir, SearchPathFileSystem) {
        let user = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let vfs = SearchPathFileSystem::new(vec![user.path().to_path_buf(), data.path().to_path_buf()]);
        (user, data, vfs)
    }

    #[test]
    fn user_root_shadows_data_root() {
        let (user, data, vfs) = two_roots();
        fs::create_dir_all(user.path().join("levels")).unwrap();
        fs::create_dir_all(data.path().join("levels")).unwrap();
        fs::write(user.path().join("levels/a.stl"), "user").unwrap();
        fs::write(data.path().join("levels/a.stl"), "data").unwrap();
        fs::write(data.path().join("levels/b.stl"), "data").unwrap();

        assert_eq!(vfs.read("levels/a.stl").unwrap(), b"user");
        assert_eq!(vfs.read("/levels/b.stl").unwrap(), b"data");
        assert!(vfs.exists("levels/b.stl"));
        assert!(!vfs.exists("levels/c.stl"));
    }

    #[test]
    fn listing_merges_roots() {
        let (user, data, vfs) = two_roots();
        fs::create_dir_all(user.path().join("world")).unwrap();
        fs::create_dir_all(data.path().join("world")).unwrap();
        fs::write(user.path().join("world/level1.stl"), "").unwrap();
        fs::write(data.path().join("world/level1.stl"), "").unwrap();
        fs::write(data.path().join("world/de.po"), "").unwrap();

        assert_eq!(vfs.list("world").unwrap(), vec!["de.po", "level1.stl"]);
    }

    #[test]
    fn missing_paths_are_not_found() {
        let (_user, _data, vfs) = two_roots();
        assert!(vfs.read("nope.stl").unwrap_err().is_not_found());
        assert!(vfs.list("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn parent_segments_are_rejected() {
        let (_user, data, vfs) = two_roots();
        fs::write(data.path().join("secret"), "x").unwrap();

        assert!(matches!(
            vfs.read("levels/../../secret"),
            Err(FileSystemError::InvalidPath(_))
        ));
        assert!(!vfs.exists("../secret"));
    }
}
