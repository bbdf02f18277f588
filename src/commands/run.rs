use clap::Args;

use rebrand::defaults;
use rebrand::rebrand::{self as engine, FileOutcome, FileReport, RunOptions, RunReport};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// One console line per file that changed or failed; nothing for unchanged files.
pub fn format_line(entry: &FileReport, dry_run: bool) -> Option<String> {
    match &entry.outcome {
        FileOutcome::Updated { .. } if dry_run => Some(format!("Would update: {}", entry.path)),
        FileOutcome::Updated { .. } => Some(format!("Updated: {}", entry.path)),
        FileOutcome::Failed { error } => Some(format!("Error in {}: {}", entry.path, error)),
        FileOutcome::Unchanged => None,
    }
}

/// Run the rewrite. In text mode lines are streamed as files are processed.
///
/// Per-file failures never change the exit code.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> CmdResult<RunReport> {
    let base = global.base_dir()?;
    let config = defaults::load_config(&base, global.config.as_deref())?;

    let options = RunOptions {
        dry_run: args.dry_run,
    };
    let stream = !global.json;

    let report = engine::run(&base, &config.defaults, options, |entry| {
        if stream {
            if let Some(line) = format_line(entry, options.dry_run) {
                println!("{}", line);
            }
        }
    })?;

    Ok((report, 0))
}
