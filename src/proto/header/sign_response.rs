//! Header of the reply carrying a signature.

use ssh_encoding::{Decode, Reader};

use super::sealed::{HeaderFields, Sealed};
use super::AgentReply;
use crate::proto::{ProtoError, ProtoResult, ResponseCode};

/// Header of an `SSH2_AGENT_SIGN_RESPONSE` message.
///
/// The signature blob of [`response_length`](Self::response_length) bytes follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignResponseHeader {
    length: u32,
    response_code: u32,
    response_length: u32,
}

impl SignResponseHeader {
    /// Decode the header from a buffer of exactly
    /// [`HEADER_LEN`](super::HEADER_LEN) bytes.
    pub fn from_bytes(bytes: &[u8]) -> ProtoResult<Self> {
        <Self as AgentReply>::decode_header(bytes)
    }

    /// Length in bytes of the rest of the message.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Always `SSH2_AGENT_SIGN_RESPONSE`.
    pub fn response_code(&self) -> u32 {
        self.response_code
    }

    /// Length in bytes of the signature blob.
    pub fn response_length(&self) -> u32 {
        self.response_length
    }
}

impl AgentReply for SignResponseHeader {
    const RESPONSE_CODE: ResponseCode = ResponseCode::SignResponse;
}

impl Sealed for SignResponseHeader {
    fn from_fields(fields: HeaderFields) -> Self {
        Self {
            length: fields.length,
            response_code: fields.response_code,
            response_length: fields.trailer,
        }
    }
}

impl Decode for SignResponseHeader {
    type Error = ProtoError;

    fn decode(reader: &mut impl Reader) -> ProtoResult<Self> {
        Self::read_header(reader)
    }
}
