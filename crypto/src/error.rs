use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("seed must be exactly 64 hex characters")]
    InvalidSeed,

    #[error("private key must be 32 or 64 bytes, got {0}")]
    InvalidLength(usize),

    #[error("public half of the 64-byte private key does not match its secret half")]
    PublicKeyMismatch,

    #[error("secure random source unavailable: {0}")]
    Entropy(String),
}
