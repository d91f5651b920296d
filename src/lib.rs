//! Tamper-proof bearer tokens over XChaCha20-Poly1305.
//!
//! Envelope wire format:
//! [version=0xBA:1B][timestamp:4B BE][nonce:24B][ciphertext][tag:16B]
//!
//! The 29-byte header is authenticated as AEAD associated data, so neither
//! the timestamp nor the nonce can be altered without invalidating the tag.
//! The whole envelope travels as a base62 string; validity is self-contained
//! in the token bytes, no lookup needed.

pub mod base62;
pub mod envelope;
pub mod error;
pub mod token;
pub mod types;

pub use base62::{base62_decode, base62_encode};
pub use envelope::{build_header, parse_header, split_envelope};
pub use error::TokenError;
pub use token::TokenCodec;
pub use types::{
    HEADER_LENGTH, KEY_LENGTH, MIN_ENVELOPE_LENGTH, MIN_TOKEN_LENGTH, NONCE_LENGTH, TAG_LENGTH,
    VERSION,
};
