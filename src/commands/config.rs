use clap::{Args, Subcommand};
use serde::Serialize;

use rebrand::defaults::{self, ConfigSource, Defaults};
use rebrand::rebrand::MappingWarning;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Show the effective configuration (file values merged over built-ins)
    Show {
        /// Ignore any config file and show the built-in values
        #[arg(long)]
        builtin: bool,
    },
    /// Show which config file is read
    Path,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ConfigOutput {
    #[serde(rename = "config.show")]
    Show {
        source: ConfigSource,
        builtin: bool,
        defaults: Defaults,
        warnings: Vec<MappingWarning>,
    },
    #[serde(rename = "config.path")]
    Path { source: ConfigSource },
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let base = global.base_dir()?;
    let source = defaults::config_source(&base, global.config.as_deref());

    match args.command {
        ConfigCommand::Show { builtin } => {
            let defaults = if builtin {
                defaults::builtin_defaults()
            } else {
                defaults::load_config(&base, global.config.as_deref())?.defaults
            };
            let warnings = defaults.replacement_map()?.lint();

            Ok((
                ConfigOutput::Show {
                    source,
                    builtin,
                    defaults,
                    warnings,
                },
                0,
            ))
        }
        ConfigCommand::Path => Ok((ConfigOutput::Path { source }, 0)),
    }
}
