//! Blocking reply header reader.
//!
//! Reads exactly [`HEADER_LEN`](crate::proto::HEADER_LEN) bytes per call from
//! any [`Read`] stream, leaving the message body in the stream for the caller.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(unix)]
//! # fn main() -> testresult::TestResult {
//! use std::os::unix::net::UnixStream;
//!
//! use ssh_agent_reply_header::blocking::HeaderReader;
//!
//! let mut reader = HeaderReader::new(UnixStream::connect(std::env::var("SSH_AUTH_SOCK")?)?);
//!
//! let header = reader.read_identities_answer()?;
//! eprintln!("Agent holds {} identities", header.count());
//! # Ok(()) }
//! # #[cfg(windows)] fn main() { }
//! ```

use std::io::Read;

use log::trace;

use crate::{
    error::AgentError,
    proto::{AgentReply, IdentitiesAnswerHeader, ReplyHeader, SignResponseHeader, HEADER_LEN},
};

/// Reads reply headers from a blocking stream.
#[derive(Debug)]
pub struct HeaderReader<S: Read> {
    stream: S,
}

impl<S: Read> HeaderReader<S> {
    /// Construct a new header reader for the given transport stream.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Extracts inner stream by consuming this object.
    pub fn into_inner(self) -> S {
        self.stream
    }

    fn read_bytes(&mut self) -> Result<[u8; HEADER_LEN], AgentError> {
        let mut bytes = [0; HEADER_LEN];
        self.stream.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Read a header of type `T`, failing if the response code does not match.
    pub fn read<T>(&mut self) -> Result<T, AgentError>
    where
        T: AgentReply + std::fmt::Debug,
    {
        let bytes = self.read_bytes()?;
        let header = T::decode_header(&bytes)?;
        trace!("Read reply header: {header:?}");
        Ok(header)
    }

    /// Read the header of an `SSH2_AGENT_IDENTITIES_ANSWER` message.
    pub fn read_identities_answer(&mut self) -> Result<IdentitiesAnswerHeader, AgentError> {
        self.read()
    }

    /// Read the header of an `SSH2_AGENT_SIGN_RESPONSE` message.
    pub fn read_sign_response(&mut self) -> Result<SignResponseHeader, AgentError> {
        self.read()
    }

    /// Read a header of whichever reply the response code names.
    pub fn read_header(&mut self) -> Result<ReplyHeader, AgentError> {
        let bytes = self.read_bytes()?;
        let header = ReplyHeader::from_bytes(&bytes)?;
        trace!("Read reply header: {header:?}");
        Ok(header)
    }
}
