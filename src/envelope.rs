//! Structural (de)serialization of the token envelope. No cryptography here.
//!
//! Envelope layout: [version:1][timestamp:4 BE][nonce:24][ciphertext][tag:16].
//! The 29-byte header doubles as the AEAD associated data.

use crate::error::TokenError;
use crate::types::{HEADER_LENGTH, MIN_ENVELOPE_LENGTH, NONCE_LENGTH, TIMESTAMP_LENGTH};

/// Assemble the 29-byte envelope header.
pub fn build_header(
    version: u8,
    timestamp: u32,
    nonce: &[u8; NONCE_LENGTH],
) -> [u8; HEADER_LENGTH] {
    let mut header = [0u8; HEADER_LENGTH];
    header[0] = version;
    header[1..1 + TIMESTAMP_LENGTH].copy_from_slice(&timestamp.to_be_bytes());
    header[1 + TIMESTAMP_LENGTH..].copy_from_slice(nonce);
    header
}

/// Split a raw envelope into header and body (ciphertext plus tag).
pub fn split_envelope(envelope: &[u8]) -> Result<(&[u8], &[u8]), TokenError> {
    if envelope.len() < MIN_ENVELOPE_LENGTH {
        return Err(TokenError::InvalidToken);
    }
    Ok(envelope.split_at(HEADER_LENGTH))
}

/// Parse a header into (version, timestamp, nonce).
///
/// The caller guarantees `header` is exactly [`HEADER_LENGTH`] bytes, which
/// [`split_envelope`] always produces.
pub fn parse_header(header: &[u8]) -> (u8, u32, &[u8]) {
    let version = header[0];
    let timestamp = u32::from_be_bytes(
        header[1..1 + TIMESTAMP_LENGTH]
            .try_into()
            .expect("slice is exactly 4 bytes"),
    );
    let nonce = &header[1 + TIMESTAMP_LENGTH..HEADER_LENGTH];
    (version, timestamp, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VERSION;

    #[test]
    fn header_round_trip() {
        let nonce = [7u8; NONCE_LENGTH];
        let header = build_header(VERSION, 123206400, &nonce);
        assert_eq!(header.len(), HEADER_LENGTH);

        let (version, timestamp, parsed_nonce) = parse_header(&header);
        assert_eq!(version, VERSION);
        assert_eq!(timestamp, 123206400);
        assert_eq!(parsed_nonce, nonce);
    }

    #[test]
    fn timestamp_is_big_endian() {
        let header = build_header(VERSION, 0x01020304, &[0u8; NONCE_LENGTH]);
        assert_eq!(header[1], 0x01);
        assert_eq!(header[2], 0x02);
        assert_eq!(header[3], 0x03);
        assert_eq!(header[4], 0x04);
    }

    #[test]
    fn split_at_header_boundary() {
        let mut envelope = vec![0u8; MIN_ENVELOPE_LENGTH + 12];
        envelope[0] = VERSION;
        let (header, body) = split_envelope(&envelope).unwrap();
        assert_eq!(header.len(), HEADER_LENGTH);
        assert_eq!(body.len(), 12 + 16);
    }

    #[test]
    fn rejects_truncated_envelope() {
        assert!(split_envelope(&[]).is_err());
        assert!(split_envelope(&[0u8; MIN_ENVELOPE_LENGTH - 1]).is_err());
        assert!(split_envelope(&[0u8; MIN_ENVELOPE_LENGTH]).is_ok());
    }
}
