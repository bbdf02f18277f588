use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, run, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version = VERSION)]
#[command(about = "Replace brand names, domains and emails across a project tree")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    run: run::RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the effective configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Some(Commands::Config(args)) => {
            let (json_result, exit_code) =
                output::map_cmd_result_to_json(config::run(args, &cli.global));
            let _ = output::print_json_result(json_result);
            exit_code
        }
        None if cli.global.json => {
            let (json_result, exit_code) =
                output::map_cmd_result_to_json(run::run(&cli.run, &cli.global));
            let _ = output::print_json_result(json_result);
            exit_code
        }
        None => match run::run(&cli.run, &cli.global) {
            Ok((_report, exit_code)) => exit_code,
            Err(err) => {
                output::print_text_error(&err);
                output::exit_code_for_error(err.code)
            }
        },
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
