use clap::{ArgGroup, Args, Subcommand};
use std::path::PathBuf;

use fshost_frame::{DEFAULT_MAX_OUTBOUND, DEFAULT_MAX_PAYLOAD};

use crate::exit::ExitResult;

pub mod manifest;
pub mod serve;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve requests over stdin/stdout (the default).
    Serve(ServeArgs),
    /// Print a browser native messaging host manifest.
    Manifest(ManifestArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command) -> ExitResult<i32> {
    match command {
        Command::Serve(args) => serve::run(args),
        Command::Manifest(args) => manifest::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Largest request payload in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        env = "FSHOST_MAX_MESSAGE_SIZE",
        default_value_t = DEFAULT_MAX_PAYLOAD
    )]
    pub max_message_size: usize,
    /// Largest response payload in bytes. Larger replies become an error reply.
    #[arg(
        long,
        value_name = "BYTES",
        env = "FSHOST_MAX_RESPONSE_SIZE",
        default_value_t = DEFAULT_MAX_OUTBOUND
    )]
    pub max_response_size: usize,
    /// Native window handle of the calling browser window (Chromium on Windows).
    #[arg(long, value_name = "HANDLE", hide = true)]
    pub parent_window: Option<String>,
    /// Arguments passed by the launching browser: the extension origin
    /// (Chromium) or the manifest path and extension id (Firefox).
    #[arg(value_name = "CALLER")]
    pub caller: Vec<String>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("browser")
        .required(true)
        .args(["chrome_origin", "firefox_extension"])
))]
pub struct ManifestArgs {
    /// Host name the extension connects to (e.g. com.example.fshost).
    #[arg(long)]
    pub name: String,
    /// Absolute path of the host executable. Default: this executable.
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
    /// Human readable description.
    #[arg(long, default_value = "Local file access for a browser extension")]
    pub description: String,
    /// Allowed Chromium extension origin (chrome-extension://<id>/). Repeatable.
    #[arg(long, value_name = "ORIGIN", conflicts_with = "firefox_extension")]
    pub chrome_origin: Vec<String>,
    /// Allowed Firefox extension id. Repeatable.
    #[arg(long, value_name = "ID")]
    pub firefox_extension: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
