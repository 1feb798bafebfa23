//! Header decoding errors

use thiserror::Error;

/// Reply header decoding error.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// The buffer does not hold exactly one header.
    #[error("Invalid header length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required number of bytes
        expected: usize,
        /// Number of bytes supplied
        actual: usize,
    },

    /// The response code does not belong to the header being decoded.
    #[error("Wrong response code: expected {expected}, got {actual}")]
    ProtocolMismatch {
        /// Response code of the requested header type
        expected: u8,
        /// Response code found in the buffer
        actual: u8,
    },

    /// The response code is not one of the reply headers known to this crate.
    #[error("Unsupported response code: {command}")]
    UnsupportedCommand {
        /// Response code found in the buffer
        command: u8,
    },

    /// Error reading the header from an SSH encoding reader.
    #[error("SSH encoding error: {0}")]
    SshEncoding(#[from] ssh_encoding::Error),
}

/// Result type used by the header decoders.
pub type ProtoResult<T> = Result<T, ProtoError>;
