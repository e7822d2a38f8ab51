use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Line format of the host log. Neither format ever touches stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Verbosity of the host log. `debug` adds the browser launch arguments and
/// skipped directory entries; `trace` adds one event per frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Build the process log sink.
///
/// Stdout carries protocol frames, so events go to `log_file` when given and
/// to stderr otherwise. A log file that cannot be opened falls back to stderr
/// and the failure is reported through the fallback sink.
pub fn build_dispatch(format: LogFormat, level: LogLevel, log_file: Option<&Path>) -> Dispatch {
    let (writer, open_error) = match log_file.map(|path| (path, open_log_file(path))) {
        Some((_, Ok(file))) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Some((path, Err(err))) => (
            BoxMakeWriter::new(std::io::stderr),
            Some(format!("{}: {err}", path.display())),
        ),
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(LevelFilter::from(level))
        .with_ansi(false)
        .with_target(false);

    let dispatch = match format {
        LogFormat::Text => Dispatch::new(builder.finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    };

    if let Some(error) = open_error {
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::warn!(%error, "cannot open log file, logging to stderr");
        });
    }

    dispatch
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
