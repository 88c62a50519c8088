//! Artifact storage - output folder, staging, and trash-based overwrite
//!
//! Generation is all-or-nothing: the artifact is produced at a staging
//! path first, then committed under its final name. An existing artifact
//! with the same name is moved into a `.trash/` subfolder with a
//! timestamp suffix rather than hard-deleted.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::QuoteError;

const TRASH_DIR: &str = ".trash";

/// The designated output folder for generated documents
#[derive(Debug)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Open (creating if absent) `<root>/<folder_name>`
    pub fn open(root: &Path, folder_name: &str) -> Result<Self, QuoteError> {
        let dir = root.join(folder_name);
        std::fs::create_dir_all(&dir).map_err(|source| QuoteError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an artifact under this store
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Hidden staging path for an artifact being produced
    pub fn staging_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{name}.staging"))
    }

    /// Commit a staged artifact under its final name, trashing any
    /// prior artifact with that name first
    pub fn commit(&self, staged: &Path, name: &str) -> Result<PathBuf, QuoteError> {
        self.trash_existing(name)?;
        let target = self.path_of(name);
        std::fs::rename(staged, &target).map_err(|source| QuoteError::Write {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }

    /// Move an existing same-named artifact into `.trash/`, if present
    pub fn trash_existing(&self, name: &str) -> Result<Option<PathBuf>, QuoteError> {
        let existing = self.path_of(name);
        if !existing.exists() {
            return Ok(None);
        }
        let trash = self.dir.join(TRASH_DIR);
        std::fs::create_dir_all(&trash).map_err(|source| QuoteError::Write {
            path: trash.clone(),
            source,
        })?;
        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let parked = trash.join(format!("{name}.{stamp}"));
        std::fs::rename(&existing, &parked).map_err(|source| QuoteError::Write {
            path: parked.clone(),
            source,
        })?;
        Ok(Some(parked))
    }

    /// Remove a staged artifact after a failed invocation
    pub fn discard(&self, staged: &Path) {
        let _ = std::fs::remove_file(staged);
    }

    /// Addressable URL of a stored artifact
    pub fn url(&self, path: &Path) -> String {
        let absolute = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        format!("file://{}", absolute.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_the_folder() {
        let root = tempdir().unwrap();
        let store = OutputStore::open(root.path(), "견적서").unwrap();
        assert!(store.dir().is_dir());
        assert!(store.dir().ends_with("견적서"));
    }

    #[test]
    fn test_commit_moves_staged_to_final() {
        let root = tempdir().unwrap();
        let store = OutputStore::open(root.path(), "out").unwrap();

        let staged = store.staging_path("Q1.pdf");
        std::fs::write(&staged, b"pdf bytes").unwrap();
        let target = store.commit(&staged, "Q1.pdf").unwrap();

        assert!(target.exists());
        assert!(!staged.exists());
        assert_eq!(std::fs::read(&target).unwrap(), b"pdf bytes");
    }

    #[test]
    fn test_overwrite_trashes_the_old_artifact() {
        let root = tempdir().unwrap();
        let store = OutputStore::open(root.path(), "out").unwrap();

        for content in [b"first".as_slice(), b"second".as_slice()] {
            let staged = store.staging_path("Q1.pdf");
            std::fs::write(&staged, content).unwrap();
            store.commit(&staged, "Q1.pdf").unwrap();
        }

        // exactly one live artifact with that name
        assert_eq!(std::fs::read(store.path_of("Q1.pdf")).unwrap(), b"second");
        let live: Vec<_> = std::fs::read_dir(store.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() == "Q1.pdf")
            .collect();
        assert_eq!(live.len(), 1);

        // the prior version is parked in .trash, not deleted
        let trashed: Vec<_> = std::fs::read_dir(store.dir().join(TRASH_DIR))
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(trashed.len(), 1);
        assert_eq!(std::fs::read(trashed[0].path()).unwrap(), b"first");
    }

    #[test]
    fn test_trash_existing_without_prior_artifact() {
        let root = tempdir().unwrap();
        let store = OutputStore::open(root.path(), "out").unwrap();
        assert!(store.trash_existing("Q1.pdf").unwrap().is_none());
    }

    #[test]
    fn test_url_is_a_file_url() {
        let root = tempdir().unwrap();
        let store = OutputStore::open(root.path(), "out").unwrap();
        std::fs::write(store.path_of("Q1.pdf"), b"x").unwrap();
        let url = store.url(&store.path_of("Q1.pdf"));
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("Q1.pdf"));
    }
}
