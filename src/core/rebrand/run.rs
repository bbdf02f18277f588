//! Entry driver: walk the root, then the fixed root-level files.

use std::path::Path;

use serde::Serialize;

use super::mapping::{MappingWarning, ReplacementMap};
use super::rewrite::{rewrite_file, FileOutcome};
use super::walk::{walk, WalkFilter};
use crate::defaults::Defaults;
use crate::error::Result;
use crate::paths;

/// Per-file entry of a run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path relative to the working directory.
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub replacements: usize,
}

/// Aggregated result of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub warnings: Vec<MappingWarning>,
    pub summary: RunSummary,
}

impl RunReport {
    fn new(root: String, dry_run: bool, warnings: Vec<MappingWarning>) -> Self {
        Self {
            root,
            dry_run,
            files: Vec::new(),
            warnings,
            summary: RunSummary::default(),
        }
    }

    fn record(&mut self, path: String, outcome: FileOutcome) {
        self.summary.scanned += 1;
        match &outcome {
            FileOutcome::Updated { replacements } => {
                self.summary.updated += 1;
                self.summary.replacements += replacements;
            }
            FileOutcome::Unchanged => self.summary.unchanged += 1,
            FileOutcome::Failed { .. } => self.summary.failed += 1,
        }
        self.files.push(FileReport { path, outcome });
    }

    /// Files that changed, in processing order.
    pub fn updated(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Updated { .. }))
    }

    /// Files that could not be read or written, in processing order.
    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Failed { .. }))
    }
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute outcomes without writing anything.
    pub dry_run: bool,
}

/// Process every candidate file reachable from `base`.
///
/// `observe` is called once per file as soon as its outcome is known, so the
/// caller can stream output. The only error is an unreadable walk root;
/// per-file failures are recorded in the report.
pub fn run<F>(base: &Path, defaults: &Defaults, options: RunOptions, mut observe: F) -> Result<RunReport>
where
    F: FnMut(&FileReport),
{
    let map: ReplacementMap = defaults.replacement_map()?;
    let warnings = map.lint();
    for warning in &warnings {
        log_status!("rebrand", "warning: {}", warning.message);
    }

    let root = base.join(&defaults.root);
    let filter = WalkFilter {
        extensions: &defaults.extensions,
        excluded_dirs: &defaults.excluded_dirs,
    };

    let files = walk(&root, filter)?;
    log_status!("rebrand", "Walking {}", root.display());

    let mut report = RunReport::new(defaults.root.clone(), options.dry_run, warnings);

    let mut process = |path: &Path, report: &mut RunReport| {
        let outcome = rewrite_file(path, &map, options.dry_run);
        report.record(paths::display_relative(path, base), outcome);
        if let Some(entry) = report.files.last() {
            observe(entry);
        }
    };

    for path in files {
        process(&path, &mut report);
    }

    for name in &defaults.root_files {
        let path = base.join(name);
        if path.is_file() {
            process(&path, &mut report);
        }
    }

    log_status!(
        "rebrand",
        "{} scanned, {} updated, {} failed",
        report.summary.scanned,
        report.summary.updated,
        report.summary.failed
    );

    Ok(report)
}
