use std::io::{Read, Write};

use fshost_frame::{
    FrameConfig, FrameError, MessageChannel, DEFAULT_MAX_OUTBOUND, DEFAULT_MAX_PAYLOAD,
};

use crate::dispatch;
use crate::error::HostError;
use crate::message::Response;
use crate::store::FileStore;

/// Dispatch loop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Largest request payload in bytes. Default: 64 MiB.
    pub max_message_size: usize,
    /// Largest response payload in bytes. Default: 1 MiB.
    pub max_response_size: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_PAYLOAD,
            max_response_size: DEFAULT_MAX_OUTBOUND,
        }
    }
}

impl HostConfig {
    fn inbound(&self) -> FrameConfig {
        FrameConfig {
            max_payload_size: self.max_message_size,
        }
    }

    fn outbound(&self) -> FrameConfig {
        FrameConfig {
            max_payload_size: self.max_response_size,
        }
    }
}

/// Dispatch loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Running,
    Stopped,
}

/// Why a loop that did not fail came to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// The peer closed the input stream on a frame boundary.
    EndOfStream,
}

/// Serves requests from `R`, writing one response per request to `W`.
///
/// Strictly sequential: a request is fully handled and answered before the
/// next frame is read.
pub struct Host<R, W, S> {
    channel: MessageChannel<R, W>,
    store: S,
    state: HostState,
    served: u64,
}

impl<R: Read, W: Write, S: FileStore> Host<R, W, S> {
    /// Create a host with default configuration.
    pub fn new(reader: R, writer: W, store: S) -> Self {
        Self::with_config(reader, writer, store, HostConfig::default())
    }

    /// Create a host with explicit configuration.
    pub fn with_config(reader: R, writer: W, store: S, config: HostConfig) -> Self {
        Self {
            channel: MessageChannel::with_limits(reader, writer, config.inbound(), config.outbound()),
            store,
            state: HostState::Running,
            served: 0,
        }
    }

    /// Serve until the peer closes the channel or the transport fails.
    pub fn run(&mut self) -> Result<Shutdown, HostError> {
        tracing::info!("native messaging host started");

        loop {
            match self.serve_one() {
                Ok(HostState::Running) => {}
                Ok(HostState::Stopped) => {
                    tracing::info!(served = self.served, "native messaging host stopped");
                    return Ok(Shutdown::EndOfStream);
                }
                Err(err) => {
                    tracing::error!(
                        served = self.served,
                        error = %err,
                        "native messaging host stopped on transport failure"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Read one frame and answer it.
    ///
    /// Returns the state after the step. Once stopped, nothing more is read or
    /// written.
    pub fn serve_one(&mut self) -> Result<HostState, HostError> {
        if self.state == HostState::Stopped {
            return Ok(HostState::Stopped);
        }

        let response = match self.channel.recv() {
            Ok(Some(message)) => dispatch::handle(&self.store, message),
            Ok(None) => {
                tracing::debug!("peer closed input stream");
                self.state = HostState::Stopped;
                return Ok(self.state);
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(error = %err, "discarding malformed message");
                Response::error(err.to_string())
            }
            Err(err) => return Err(self.fail(HostError::Receive(err))),
        };

        self.reply(&response)?;
        self.served += 1;
        Ok(self.state)
    }

    fn reply(&mut self, response: &Response) -> Result<(), HostError> {
        match self.channel.send(response) {
            Ok(()) => Ok(()),
            Err(FrameError::PayloadTooLarge { size, max }) => {
                tracing::warn!(size, max, "response exceeds message size limit");
                let fallback = Response::error(format!(
                    "response too large: {size} bytes exceeds limit of {max}"
                ));
                self.channel
                    .send(&fallback)
                    .map_err(|err| self.fail(HostError::Send(err)))
            }
            Err(err) => Err(self.fail(HostError::Send(err))),
        }
    }

    fn fail(&mut self, err: HostError) -> HostError {
        self.state = HostState::Stopped;
        err
    }

    /// Current loop state.
    pub fn state(&self) -> HostState {
        self.state
    }

    /// Number of responses sent so far.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Consume the host and return the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        self.channel.into_inner()
    }
}
