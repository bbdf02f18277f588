use clap::Args;
use std::path::PathBuf;

pub type CmdResult<T> = rebrand::Result<(T, i32)>;

pub mod config;
pub mod run;

/// Flags shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Working directory the walk root, root files and config resolve against
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of ./rebrand.json
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON envelope instead of text lines
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Resolve the working directory, defaulting to the process cwd.
    pub fn base_dir(&self) -> rebrand::Result<PathBuf> {
        let base = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                rebrand::Error::internal_io(e.to_string(), Some("resolve cwd".to_string()))
            })?,
        };

        if !base.is_dir() {
            return Err(rebrand::Error::validation_invalid_argument(
                "dir",
                format!("'{}' is not a directory", base.display()),
            ));
        }

        Ok(base)
    }
}
