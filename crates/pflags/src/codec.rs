//! Text encoding of serialized parse results.
//!
//! The byte form (see [`ParseResult::to_bytes`](crate::ParseResult::to_bytes))
//! is turned into a token that travels as a single shell argument.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Reversible bytes <-> text transform.
pub trait TextEncoding {
    fn encode(&self, bytes: &[u8]) -> String;
    fn decode(&self, token: &str) -> Result<Vec<u8>>;
}

/// Standard base64 alphabet with padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl TextEncoding for Base64 {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, token: &str) -> Result<Vec<u8>> {
        STANDARD
            .decode(token)
            .map_err(|e| Error::Internal(e.to_string()))
    }
}

pub fn encode(bytes: &[u8]) -> String {
    Base64.encode(bytes)
}

pub fn decode(token: &str) -> Result<Vec<u8>> {
    Base64.decode(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_single_shell_word() {
        let token = encode(b"{\"nonFlagArgs\":[\"a b\",\"\\n\"]}");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        );
        assert_eq!(decode(&token).unwrap(), b"{\"nonFlagArgs\":[\"a b\",\"\\n\"]}");
    }

    #[test]
    fn malformed_token_is_internal_error() {
        assert!(matches!(decode("not base64!"), Err(Error::Internal(_))));
    }

    #[test]
    fn empty_token_decodes_to_empty_bytes() {
        assert!(decode("").unwrap().is_empty());
    }
}
