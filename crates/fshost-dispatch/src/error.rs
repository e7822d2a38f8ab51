use std::io;

use fshost_frame::FrameError;

/// Errors produced while handling a single request.
///
/// None of these stop the dispatch loop: each one is turned into an
/// `{"error": ...}` response for the peer.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    /// The request `type` is missing or not one the host understands.
    #[error("Unknown message type: {0}")]
    UnknownOperation(String),

    /// A known request is missing a required field or has one of the wrong type.
    #[error("invalid {operation} request: {source}")]
    InvalidRequest {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The target file or directory does not exist.
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: String },

    /// The OS refused access to the target.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// The `data` field of a write request is not valid base64.
    #[error("invalid base64 data: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The listing pattern is not a valid glob.
    #[error("invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Any other I/O failure on the target.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl OpError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => OpError::NotFound { what: "Path", path },
            io::ErrorKind::PermissionDenied => OpError::PermissionDenied { path },
            _ => OpError::Io { path, source: err },
        }
    }
}

pub type OpResult<T> = std::result::Result<T, OpError>;

/// A transport failure that stopped the dispatch loop.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The next request could not be read off the input stream.
    #[error("failed to receive request: {0}")]
    Receive(#[source] FrameError),

    /// A response could not be written to the output stream.
    #[error("failed to send response: {0}")]
    Send(#[source] FrameError),
}

impl HostError {
    /// The underlying frame error.
    pub fn frame_error(&self) -> &FrameError {
        match self {
            HostError::Receive(err) | HostError::Send(err) => err,
        }
    }
}
