use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Malformed token text: characters outside the base62 alphabet, or a
    /// string/envelope too short to hold a header and tag.
    #[error("invalid base62 token")]
    InvalidToken,

    #[error("invalid token version: expected {expected:#04x}, got {got:#04x}")]
    InvalidTokenVersion { expected: u8, got: u8 },

    #[error("bad key length: expected {expected} bytes, got {got}")]
    BadKeyLength { expected: usize, got: usize },

    /// AEAD verification failed. Deliberately carries no detail: a wrong key,
    /// a tampered ciphertext or tag, and a tampered header are
    /// indistinguishable to the caller.
    #[error("token authentication failed")]
    AuthenticationFailed,

    #[error("token expired at {expiry} (unix seconds)")]
    Expired { expiry: u64 },

    #[error("encryption failed")]
    EncryptionFailed,

    #[error("random number generation failed: {0}")]
    RngFailed(String),
}
