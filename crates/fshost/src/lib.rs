//! Browser native messaging host for local file access.
//!
//! A browser extension launches `fshost` and talks to it over stdin/stdout
//! with length-prefixed JSON frames, asking it to read, write and list files.
//!
//! # Crate Structure
//!
//! - [`frame`]: Length-prefixed JSON framing over byte streams
//! - [`dispatch`]: Request routing, file operations and the serve loop

/// Re-export frame types.
pub mod frame {
    pub use fshost_frame::*;
}

/// Re-export dispatch types.
pub mod dispatch {
    pub use fshost_dispatch::*;
}
