mod cmd;
mod exit;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::{Command, ServeArgs};
use crate::logging::{build_dispatch, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "fshost",
    version,
    about = "Browser native messaging host for local file access"
)]
struct Cli {
    /// Log output format.
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "text",
        env = "FSHOST_LOG_FORMAT",
        global = true
    )]
    log_format: LogFormat,

    /// Minimum log level.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        env = "FSHOST_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH", env = "FSHOST_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

fn main() {
    let cli = Cli::parse();
    let dispatch = build_dispatch(cli.log_format, cli.log_level, cli.log_file.as_deref());

    let command = cli.command.unwrap_or(Command::Serve(cli.serve));
    let result = tracing::dispatcher::with_default(&dispatch, || cmd::run(command));

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
