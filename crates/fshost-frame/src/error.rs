/// Errors that can occur while reading or writing framed messages.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The stream ended partway through the 4-byte length prefix.
    #[error("stream closed inside length prefix ({received} of 4 bytes)")]
    TruncatedFrame { received: usize },

    /// The stream ended before the announced payload was complete.
    #[error("stream closed inside payload ({received} of {expected} bytes)")]
    TruncatedPayload { expected: usize, received: usize },

    /// A complete frame arrived but its payload is not UTF-8 JSON.
    #[error("malformed payload: {detail}")]
    MalformedPayload { detail: String },

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The peer closed its read side while a frame was being written.
    #[error("channel closed by peer")]
    ChannelClosed,

    /// An outgoing message could not be serialized to JSON.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrameError {
    /// Whether the channel is still usable after this error.
    ///
    /// Only a malformed payload leaves the stream positioned on a frame
    /// boundary; everything else means the byte stream can no longer be trusted.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FrameError::MalformedPayload { .. })
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
