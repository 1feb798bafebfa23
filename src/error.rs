//! Errors returned when reading reply headers from a transport.

use std::io;

use thiserror::Error;

use crate::proto::ProtoError;

/// Error reading a reply header from an agent connection.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Header bytes were read but could not be decoded.
    #[error("Agent: Protocol error: {0}")]
    Proto(#[from] ProtoError),

    /// The underlying stream failed or ended before a full header was read.
    #[error("Agent: I/O error: {0}")]
    IO(#[from] io::Error),
}
