//! Fixed-size headers of SSH agent reply messages.
//!
//! Both headers share one layout of [`HEADER_LEN`] bytes:
//!
//! | Offset | Width | Field                                   |
//! |--------|-------|-----------------------------------------|
//! | 0      | 4     | message length                          |
//! | 4      | 1     | response code                           |
//! | 5      | 4     | identity count, or signature blob length |
//!
//! All integers are big-endian and unsigned.

mod identities_answer;
mod sign_response;

use byteorder::{BigEndian, ByteOrder};
use ssh_encoding::{Decode, Reader};

pub use self::identities_answer::IdentitiesAnswerHeader;
pub use self::sign_response::SignResponseHeader;
use super::code::ResponseCode;
use super::error::{ProtoError, ProtoResult};

/// Size of an agent reply header in bytes.
pub const HEADER_LEN: usize = 9;

const LENGTH_OFFSET: usize = 0;
const CODE_OFFSET: usize = 4;
const TRAILER_OFFSET: usize = 5;

/// Reads `width` bytes at `offset` as a big-endian unsigned integer.
///
/// The caller must make sure `bytes` holds at least `offset + width` bytes
/// and that `width` is between 1 and 4.
fn read_field(bytes: &[u8], offset: usize, width: usize) -> u32 {
    debug_assert!((1..=4).contains(&width));
    BigEndian::read_uint(&bytes[offset..offset + width], width) as u32
}

pub(crate) mod sealed {
    /// The three fields of a header whose response code has been validated.
    ///
    /// Only the header parser produces these, and only this crate's header
    /// types can be built from them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeaderFields {
        pub(crate) length: u32,
        pub(crate) response_code: u32,
        pub(crate) trailer: u32,
    }

    /// Construction from validated fields, restricted to this crate.
    pub trait Sealed: Sized {
        /// Builds the header from fields already checked against its response code.
        fn from_fields(fields: HeaderFields) -> Self;
    }
}

use self::sealed::HeaderFields;

fn check_len(bytes: &[u8]) -> ProtoResult<()> {
    if bytes.len() != HEADER_LEN {
        return Err(ProtoError::InvalidLength {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Decodes the header fields, requiring the response code to be `expected`.
fn parse(bytes: &[u8], expected: ResponseCode) -> ProtoResult<HeaderFields> {
    check_len(bytes)?;

    let length = read_field(bytes, LENGTH_OFFSET, 4);

    let response_code = read_field(bytes, CODE_OFFSET, 1);
    if response_code != u32::from(expected.to_u8()) {
        return Err(ProtoError::ProtocolMismatch {
            expected: expected.to_u8(),
            actual: bytes[CODE_OFFSET],
        });
    }

    let trailer = read_field(bytes, TRAILER_OFFSET, 4);

    Ok(HeaderFields {
        length,
        response_code,
        trailer,
    })
}

/// Reads exactly one header worth of bytes from `reader`.
fn read_header_bytes(reader: &mut impl Reader) -> ProtoResult<[u8; HEADER_LEN]> {
    let mut bytes = [0u8; HEADER_LEN];
    reader.read(&mut bytes)?;
    Ok(bytes)
}

/// A fixed-size reply header identified by its response code.
///
/// Implemented by [`IdentitiesAnswerHeader`] and [`SignResponseHeader`] only:
///
/// ```compile_fail
/// use ssh_agent_reply_header::proto::{AgentReply, ResponseCode};
///
/// #[derive(Debug)]
/// struct Forged;
///
/// impl AgentReply for Forged {
///     const RESPONSE_CODE: ResponseCode = ResponseCode::SignResponse;
/// }
/// ```
pub trait AgentReply: sealed::Sealed {
    /// Response code every header of this type carries.
    const RESPONSE_CODE: ResponseCode;

    /// Decodes a header from a buffer of exactly [`HEADER_LEN`] bytes.
    fn decode_header(bytes: &[u8]) -> ProtoResult<Self> {
        parse(bytes, Self::RESPONSE_CODE).map(Self::from_fields)
    }

    /// Decodes a header from the next [`HEADER_LEN`] bytes of `reader`.
    ///
    /// Bytes after the header are left in the reader.
    fn read_header(reader: &mut impl Reader) -> ProtoResult<Self> {
        Self::decode_header(&read_header_bytes(reader)?)
    }
}

/// Decode an `SSH2_AGENT_IDENTITIES_ANSWER` header.
pub fn decode_identities_answer(bytes: &[u8]) -> ProtoResult<IdentitiesAnswerHeader> {
    IdentitiesAnswerHeader::decode_header(bytes)
}

/// Decode an `SSH2_AGENT_SIGN_RESPONSE` header.
pub fn decode_sign_response(bytes: &[u8]) -> ProtoResult<SignResponseHeader> {
    SignResponseHeader::decode_header(bytes)
}

/// Header of either reply, selected by the response code in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplyHeader {
    /// Header of an `SSH2_AGENT_IDENTITIES_ANSWER` message.
    IdentitiesAnswer(IdentitiesAnswerHeader),

    /// Header of an `SSH2_AGENT_SIGN_RESPONSE` message.
    SignResponse(SignResponseHeader),
}

impl ReplyHeader {
    /// Decodes whichever header the response code byte names.
    pub fn from_bytes(bytes: &[u8]) -> ProtoResult<Self> {
        check_len(bytes)?;

        match ResponseCode::from_u8(bytes[CODE_OFFSET])? {
            ResponseCode::IdentitiesAnswer => {
                IdentitiesAnswerHeader::decode_header(bytes).map(Self::IdentitiesAnswer)
            }
            ResponseCode::SignResponse => {
                SignResponseHeader::decode_header(bytes).map(Self::SignResponse)
            }
        }
    }

    /// The protocol message identifier of this header.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Self::IdentitiesAnswer(_) => ResponseCode::IdentitiesAnswer,
            Self::SignResponse(_) => ResponseCode::SignResponse,
        }
    }

    /// Declared length of the message following the length field.
    pub fn length(&self) -> u32 {
        match self {
            Self::IdentitiesAnswer(header) => header.length(),
            Self::SignResponse(header) => header.length(),
        }
    }
}

impl Decode for ReplyHeader {
    type Error = ProtoError;

    fn decode(reader: &mut impl Reader) -> ProtoResult<Self> {
        Self::from_bytes(&read_header_bytes(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_field_widths() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0xff, 0x00, 0x00, 0x01, 0x00];

        assert_eq!(read_field(&bytes, 0, 4), 0x0102_0304);
        assert_eq!(read_field(&bytes, 4, 1), 0xff);
        assert_eq!(read_field(&bytes, 5, 4), 0x0000_0100);
    }

    #[test]
    fn high_code_byte_is_not_sign_extended() {
        let bytes = [0, 0, 0, 0, 0x8c, 0, 0, 0, 0];

        assert!(matches!(
            parse(&bytes, ResponseCode::IdentitiesAnswer),
            Err(ProtoError::ProtocolMismatch {
                expected: 12,
                actual: 0x8c
            })
        ));
    }

    #[test]
    fn length_is_checked_first() {
        // code byte would also mismatch, length error wins
        let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

        assert!(matches!(
            parse(&bytes, ResponseCode::SignResponse),
            Err(ProtoError::InvalidLength {
                expected: HEADER_LEN,
                actual: 10
            })
        ));
    }

    #[test]
    fn decoded_code_matches_header_type() -> ProtoResult<()> {
        let identities = IdentitiesAnswerHeader::decode_header(&[0, 0, 0, 5, 12, 0, 0, 0, 3])?;
        assert_eq!(identities.response_code(), 12);

        let signature = SignResponseHeader::decode_header(&[0, 0, 0, 5, 14, 0, 0, 0, 3])?;
        assert_eq!(signature.response_code(), 14);
        Ok(())
    }

    #[test]
    fn dispatch_rejects_unknown_code() {
        let bytes = [0, 0, 0, 1, 5, 0, 0, 0, 0];

        assert!(matches!(
            ReplyHeader::from_bytes(&bytes),
            Err(ProtoError::UnsupportedCommand { command: 5 })
        ));
    }
}
