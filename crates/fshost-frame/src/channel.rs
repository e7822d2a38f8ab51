use std::io::{Read, Write};

use serde::Serialize;
use serde_json::Value;

use crate::codec::FrameConfig;
use crate::error::{FrameError, Result};
use crate::reader::FrameReader;
use crate::writer::FrameWriter;

/// A bidirectional JSON message channel over a pair of byte streams.
///
/// Each message travels as one length-prefixed frame holding UTF-8 JSON.
/// The channel has no notion of message semantics.
pub struct MessageChannel<R, W> {
    reader: FrameReader<R>,
    writer: FrameWriter<W>,
}

impl<R: Read, W: Write> MessageChannel<R, W> {
    /// Create a channel with default configuration.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, FrameConfig::default())
    }

    /// Create a channel whose reader and writer share one configuration.
    pub fn with_config(reader: R, writer: W, config: FrameConfig) -> Self {
        Self::with_limits(reader, writer, config, config)
    }

    /// Create a channel with separate limits for incoming and outgoing frames.
    pub fn with_limits(
        reader: R,
        writer: W,
        inbound: FrameConfig,
        outbound: FrameConfig,
    ) -> Self {
        Self {
            reader: FrameReader::with_config(reader, inbound),
            writer: FrameWriter::with_config(writer, outbound),
        }
    }

    /// Receive the next message (blocking).
    ///
    /// Returns `Ok(None)` once the peer has closed its side. A frame whose
    /// payload is not UTF-8 JSON yields `FrameError::MalformedPayload`; the
    /// frame has been fully consumed, so the next call reads the next frame.
    pub fn recv(&mut self) -> Result<Option<Value>> {
        let Some(payload) = self.reader.read_frame()? else {
            return Ok(None);
        };

        let text = std::str::from_utf8(&payload).map_err(|err| FrameError::MalformedPayload {
            detail: format!("payload is not valid UTF-8: {err}"),
        })?;

        serde_json::from_str(text)
            .map(Some)
            .map_err(|err| FrameError::MalformedPayload {
                detail: format!("payload is not valid JSON: {err}"),
            })
    }

    /// Serialize and send one message, flushing immediately.
    pub fn send<T: Serialize + ?Sized>(&mut self, message: &T) -> Result<()> {
        let payload = serde_json::to_vec(message).map_err(FrameError::Encode)?;
        self.writer.send(&payload)
    }

    /// Borrow the frame reader.
    pub fn reader(&self) -> &FrameReader<R> {
        &self.reader
    }

    /// Borrow the frame writer.
    pub fn writer(&self) -> &FrameWriter<W> {
        &self.writer
    }

    /// Consume the channel and return both streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader.into_inner(), self.writer.into_inner())
    }
}
