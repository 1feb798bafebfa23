//! Response codes of the agent replies decoded by this crate.

use super::error::{ProtoError, ProtoResult};

/// `SSH2_AGENT_IDENTITIES_ANSWER` message number.
pub const SSH2_AGENT_IDENTITIES_ANSWER: u8 = 12;

/// `SSH2_AGENT_SIGN_RESPONSE` message number.
pub const SSH2_AGENT_SIGN_RESPONSE: u8 = 14;

/// Message numbers of the agent replies that carry a fixed-size header.
///
/// https://datatracker.ietf.org/doc/html/draft-miller-ssh-agent#name-message-numbers
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum ResponseCode {
    IdentitiesAnswer = SSH2_AGENT_IDENTITIES_ANSWER,
    SignResponse = SSH2_AGENT_SIGN_RESPONSE,
}

impl ResponseCode {
    /// Convert an unsigned byte into a [`ResponseCode`] (if valid)
    pub fn from_u8(byte: u8) -> ProtoResult<Self> {
        let out = match byte {
            SSH2_AGENT_IDENTITIES_ANSWER => Self::IdentitiesAnswer,
            SSH2_AGENT_SIGN_RESPONSE => Self::SignResponse,
            command => Err(ProtoError::UnsupportedCommand { command })?,
        };

        Ok(out)
    }

    /// Serialize the response code as a byte
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(ResponseCode::from_u8(12).ok(), Some(ResponseCode::IdentitiesAnswer));
        assert_eq!(ResponseCode::from_u8(14).ok(), Some(ResponseCode::SignResponse));
        assert_eq!(ResponseCode::SignResponse.to_u8(), 14);
    }

    #[test]
    fn unknown_code() {
        assert!(matches!(
            ResponseCode::from_u8(13),
            Err(ProtoError::UnsupportedCommand { command: 13 })
        ));
    }
}
