//! Directory walker: lazy top-down traversal with directory pruning.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Which files a walk yields and which directories it never enters.
#[derive(Debug, Clone, Copy)]
pub struct WalkFilter<'a> {
    /// File name suffixes, including the leading dot (`.md`).
    pub extensions: &'a [String],
    /// Directory names pruned at any depth.
    pub excluded_dirs: &'a [String],
}

impl WalkFilter<'_> {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    pub fn matches_file(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

/// Iterator over candidate files under a root.
///
/// Directories are read one at a time as the iterator advances. Within a
/// directory, files are yielded in name order before any subdirectory is
/// entered.
pub struct Walk<'a> {
    filter: WalkFilter<'a>,
    files: VecDeque<PathBuf>,
    dirs: Vec<PathBuf>,
}

/// Start a walk at `root`.
///
/// The root itself must be a readable directory; unreadable directories
/// below it are skipped.
pub fn walk<'a>(root: &Path, filter: WalkFilter<'a>) -> Result<Walk<'a>> {
    let mut walk = Walk {
        filter,
        files: VecDeque::new(),
        dirs: Vec::new(),
    };

    let entries = fs::read_dir(root)
        .map_err(|e| Error::walk_root_not_found(root.display().to_string(), Some(e.to_string())))?;
    walk.expand(entries);

    Ok(walk)
}

impl Walk<'_> {
    fn expand(&mut self, entries: fs::ReadDir) {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();

            if file_type.is_dir() {
                if !self.filter.is_excluded_dir(&name) {
                    dirs.push(path);
                }
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                // symlinked directories are listed but not followed
                if self.filter.matches_file(&name) {
                    files.push(path);
                }
            }
        }

        files.sort();
        dirs.sort();

        self.files.extend(files);
        // stack: reverse so the alphabetically first directory is visited first
        self.dirs.extend(dirs.into_iter().rev());
    }
}

impl Iterator for Walk<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(file) = self.files.pop_front() {
                return Some(file);
            }

            let dir = self.dirs.pop()?;
            if let Ok(entries) = fs::read_dir(&dir) {
                self.expand(entries);
            }
        }
    }
}
