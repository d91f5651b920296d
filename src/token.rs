//! Token issue and verify orchestration.
//!
//! Encode: fresh timestamp + fresh random nonce -> header -> XChaCha20-Poly1305
//! seal with the header as associated data -> base62.
//! Decode runs the exact inverse with a length gate up front and an expiry
//! gate after authentication.

use std::time::{SystemTime, UNIX_EPOCH};

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use zeroize::Zeroize;

use crate::base62::{base62_decode, base62_encode};
use crate::envelope::{build_header, parse_header, split_envelope};
use crate::error::TokenError;
use crate::types::{KEY_LENGTH, MIN_TOKEN_LENGTH, NONCE_LENGTH, VERSION};

/// Issues and verifies base62 XChaCha20-Poly1305 tokens under a single key.
///
/// The key is held for the lifetime of the codec and zeroed on drop. The
/// codec is deliberately not `Clone`: one owner per key. The key length is
/// not checked at construction; the cipher checks it on every encode and
/// decode and reports [`TokenError::BadKeyLength`].
pub struct TokenCodec {
    key: Vec<u8>,
    ttl: u32,
}

impl TokenCodec {
    /// Create a codec from raw key material. Valid keys are exactly 32 bytes.
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            ttl: 0,
        }
    }

    /// Set a time-to-live in seconds, enforced on decode. Zero disables
    /// expiry checking.
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Encode plaintext into a token.
    ///
    /// Draws a fresh timestamp and a fresh 24-byte random nonce on every
    /// call.
    pub fn encode(&self, plaintext: &[u8]) -> Result<String, TokenError> {
        let timestamp = unix_now() as u32;
        let mut nonce = [0u8; NONCE_LENGTH];
        getrandom::getrandom(&mut nonce).map_err(|e| TokenError::RngFailed(e.to_string()))?;
        self.encode_with(plaintext, timestamp, &nonce)
    }

    /// Encode with an explicit timestamp and nonce.
    ///
    /// Exists for deterministic test vectors. Reusing a nonce under the same
    /// key destroys the confidentiality and integrity of every token minted
    /// with it; production callers use [`encode`](Self::encode), which never
    /// repeats either value.
    pub fn encode_with(
        &self,
        plaintext: &[u8],
        timestamp: u32,
        nonce: &[u8; NONCE_LENGTH],
    ) -> Result<String, TokenError> {
        let header = build_header(VERSION, timestamp, nonce);
        let sealed = self
            .cipher()?
            .encrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: plaintext,
                    aad: &header,
                },
            )
            .map_err(|_| TokenError::EncryptionFailed)?;

        let mut envelope = Vec::with_capacity(header.len() + sealed.len());
        envelope.extend_from_slice(&header);
        envelope.extend_from_slice(&sealed);
        Ok(base62_encode(&envelope))
    }

    /// Decode a token, verifying authenticity and, if a TTL is configured,
    /// expiry.
    ///
    /// The expiry check runs only after successful authentication, so an
    /// expired-but-tampered token reports
    /// [`TokenError::AuthenticationFailed`], not
    /// [`TokenError::Expired`].
    pub fn decode(&self, token: &str) -> Result<Vec<u8>, TokenError> {
        if token.len() < MIN_TOKEN_LENGTH {
            return Err(TokenError::InvalidToken);
        }

        let envelope = base62_decode(token)?;
        let (header, body) = split_envelope(&envelope)?;
        let (version, timestamp, nonce) = parse_header(header);
        if version != VERSION {
            return Err(TokenError::InvalidTokenVersion {
                expected: VERSION,
                got: version,
            });
        }

        let plaintext = self
            .cipher()?
            .decrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: body,
                    aad: header,
                },
            )
            .map_err(|_| TokenError::AuthenticationFailed)?;

        if self.ttl != 0 {
            // Widen before adding so a timestamp near u32::MAX cannot wrap.
            let expiry = u64::from(timestamp) + u64::from(self.ttl);
            if expiry < unix_now() {
                return Err(TokenError::Expired { expiry });
            }
        }

        Ok(plaintext)
    }

    /// Construct the cipher from the raw key. Built per call so no key state
    /// is shared across operations.
    fn cipher(&self) -> Result<XChaCha20Poly1305, TokenError> {
        XChaCha20Poly1305::new_from_slice(&self.key).map_err(|_| TokenError::BadKeyLength {
            expected: KEY_LENGTH,
            got: self.key.len(),
        })
    }
}

impl Drop for TokenCodec {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
