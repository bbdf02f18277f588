//! Literal rebranding: replace fixed strings across a project tree.
//!
//! Walks a root directory (pruning VCS and build directories), applies an
//! ordered replacement mapping to every file with a recognized extension,
//! then does the same for a fixed list of files in the working directory.

mod mapping;
mod rewrite;
mod run;
mod walk;

pub use mapping::{Applied, MappingWarning, Replacement, ReplacementMap};
pub use rewrite::{rewrite_file, FileOutcome};
pub use run::{run, FileReport, RunOptions, RunReport, RunSummary};
pub use walk::{walk, Walk, WalkFilter};
