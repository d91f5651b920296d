/// Wire format version tag. First byte of every envelope.
pub const VERSION: u8 = 0xBA;

/// XChaCha20-Poly1305 key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Timestamp field length in bytes (big-endian Unix seconds).
pub const TIMESTAMP_LENGTH: usize = 4;

/// XChaCha20-Poly1305 nonce length in bytes (192 bits).
pub const NONCE_LENGTH: usize = 24;

/// Poly1305 authentication tag length in bytes (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Envelope header length: version + timestamp + nonce.
pub const HEADER_LENGTH: usize = 1 + TIMESTAMP_LENGTH + NONCE_LENGTH;

/// Smallest possible envelope: header plus tag over an empty ciphertext.
pub const MIN_ENVELOPE_LENGTH: usize = HEADER_LENGTH + TAG_LENGTH;

/// Exact base62-encoded length of an empty-payload envelope.
///
/// Every 45-byte envelope whose first byte is [`VERSION`] encodes to exactly
/// this many characters, so shorter tokens are rejected before any decoding
/// is attempted. Tied to [`MIN_ENVELOPE_LENGTH`] and the alphabet size by the
/// derived-invariant test below.
pub const MIN_TOKEN_LENGTH: usize = 61;
