//! In-memory file system for use case tests
//!
//! Every mutation is logged so tests can assert that nothing was written.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// A write performed through the port
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mutation {
    CreateDir(PathBuf),
    Copy { from: PathBuf, to: PathBuf },
}

#[derive(Debug, Default)]
pub(crate) struct MemoryFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: BTreeSet<PathBuf>,
    log: RefCell<Vec<Mutation>>,
}

impl MemoryFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors
    pub(crate) fn with_dir(self, path: impl AsRef<Path>) -> Self {
        {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in path.as_ref().ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    dirs.insert(ancestor.to_path_buf());
                }
            }
        }
        self
    }

    /// Add a file; its parent directories are created too
    pub(crate) fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        this.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.into());
        this
    }

    /// Directory creation under `path` fails with permission denied
    pub(crate) fn with_read_only_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.read_only.insert(path.as_ref().to_path_buf());
        self
    }

    pub(crate) fn mutations(&self) -> Vec<Mutation> {
        self.log.borrow().clone()
    }

    pub(crate) fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        if self.exists(path) {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.is_dir(parent) {
            return Err(FsError::NotFound(parent.to_path_buf()));
        }
        if self.read_only.contains(parent) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        self.log
            .borrow_mut()
            .push(Mutation::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read_to_string(from)?;
        let parent = to.parent().unwrap_or(Path::new(""));
        if !self.is_dir(parent) {
            return Err(FsError::NotFound(parent.to_path_buf()));
        }
        self.files.borrow_mut().insert(to.to_path_buf(), content);
        self.log.borrow_mut().push(Mutation::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
        Ok(())
    }
}
