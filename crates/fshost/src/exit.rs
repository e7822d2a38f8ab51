use std::io;

use fshost_dispatch::HostError;
use fshost_frame::FrameError;

// Process exit codes. A browser only sees whether the host exited; the code
// matters to whoever runs `fshost` by hand or reads the log.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type ExitResult<T> = Result<T, ExitError>;

/// A failure that ends the process, carrying the exit code to report.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub fn io_error(context: &str, err: &io::Error) -> ExitError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => TRANSPORT_ERROR,
        _ => FAILURE,
    };
    ExitError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: &FrameError) -> ExitError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::TruncatedFrame { .. }
        | FrameError::TruncatedPayload { .. }
        | FrameError::ChannelClosed => ExitError::new(TRANSPORT_ERROR, format!("{context}: {err}")),
        FrameError::PayloadTooLarge { .. } | FrameError::MalformedPayload { .. } => {
            ExitError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::Encode(_) => ExitError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn host_error(context: &str, err: &HostError) -> ExitError {
    let context = match err {
        HostError::Receive(_) => format!("{context}: receive failed"),
        HostError::Send(_) => format!("{context}: send failed"),
    };
    frame_error(&context, err.frame_error())
}
