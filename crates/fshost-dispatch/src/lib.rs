//! Request dispatch loop and file-system operations for a browser native
//! messaging host.
//!
//! The [`Host`] pulls one JSON message at a time off a [`MessageChannel`],
//! routes it by its `type` field, runs the matching operation against a
//! [`FileStore`], and sends exactly one reply before reading the next frame.
//!
//! [`MessageChannel`]: fshost_frame::MessageChannel

pub mod dispatch;
pub mod error;
pub mod host;
pub mod message;
pub mod ops;
pub mod store;

pub use dispatch::{execute, handle};
pub use error::{HostError, OpError, OpResult};
pub use host::{Host, HostConfig, HostState, Shutdown};
pub use message::{
    FileContents, FileEntry, Listing, Request, Response, WriteReceipt, DEFAULT_PATTERN, GET_FILE,
    LIST_FILES, PING, WRITE_FILE,
};
pub use store::{FileStore, LocalFileStore};
