//! Length-prefixed JSON message framing for browser native messaging.
//!
//! Every message is framed as:
//! - A 4-byte little-endian payload length
//! - Exactly that many bytes of UTF-8 encoded JSON
//!
//! No partial reads, no buffer management in user code.

pub mod channel;
pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use channel::MessageChannel;
pub use codec::{
    decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_OUTBOUND, DEFAULT_MAX_PAYLOAD, HEADER_SIZE,
};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
