//! Header of the reply listing the identities held by an agent.

use ssh_encoding::{Decode, Reader};

use super::sealed::{HeaderFields, Sealed};
use super::AgentReply;
use crate::proto::{ProtoError, ProtoResult, ResponseCode};

/// Header of an `SSH2_AGENT_IDENTITIES_ANSWER` message.
///
/// It is followed on the wire by [`count`](Self::count) identities, each a
/// public key blob and a comment string.
///
/// Described in [draft-miller-ssh-agent-14 § 3.5](https://www.ietf.org/archive/id/draft-miller-ssh-agent-14.html#section-3.5)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdentitiesAnswerHeader {
    length: u32,
    response_code: u32,
    count: u32,
}

impl IdentitiesAnswerHeader {
    /// Decode the header from a buffer of exactly
    /// [`HEADER_LEN`](super::HEADER_LEN) bytes.
    pub fn from_bytes(bytes: &[u8]) -> ProtoResult<Self> {
        <Self as AgentReply>::decode_header(bytes)
    }

    /// Length in bytes of the rest of the message.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Always `SSH2_AGENT_IDENTITIES_ANSWER`.
    pub fn response_code(&self) -> u32 {
        self.response_code
    }

    /// Number of keys the agent has.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl AgentReply for IdentitiesAnswerHeader {
    const RESPONSE_CODE: ResponseCode = ResponseCode::IdentitiesAnswer;
}

impl Sealed for IdentitiesAnswerHeader {
    fn from_fields(fields: HeaderFields) -> Self {
        Self {
            length: fields.length,
            response_code: fields.response_code,
            count: fields.trailer,
        }
    }
}

impl Decode for IdentitiesAnswerHeader {
    type Error = ProtoError;

    fn decode(reader: &mut impl Reader) -> ProtoResult<Self> {
        Self::read_header(reader)
    }
}
