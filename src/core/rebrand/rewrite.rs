//! File rewriter: read, substitute, write back on change.

use std::path::Path;

use serde::Serialize;

use super::mapping::ReplacementMap;
use crate::utils::io;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed (and was written, unless this was a dry run).
    Updated { replacements: usize },
    Unchanged,
    /// Read or write failed; the file is left as it was.
    Failed { error: String },
}

impl FileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOutcome::Updated { .. } => "updated",
            FileOutcome::Unchanged => "unchanged",
            FileOutcome::Failed { .. } => "error",
        }
    }
}

/// Apply `map` to the file at `path`.
///
/// The file is only written when the substituted content differs from what
/// was read. Failures are returned as `FileOutcome::Failed`, never propagated.
pub fn rewrite_file(path: &Path, map: &ReplacementMap, dry_run: bool) -> FileOutcome {
    let content = match io::read_file(path, &format!("read {}", path.display())) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Failed { error: e.reason() },
    };

    let applied = map.apply(&content);
    if applied.content == content {
        return FileOutcome::Unchanged;
    }

    if !dry_run {
        if let Err(e) = io::write_file(path, &applied.content, &format!("write {}", path.display())) {
            return FileOutcome::Failed { error: e.reason() };
        }
    }

    FileOutcome::Updated {
        replacements: applied.replacements,
    }
}
