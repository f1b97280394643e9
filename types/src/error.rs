//! Parse errors for the textual forms of the core types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} hex characters, got {actual}")]
    HexLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    Hex(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid wallet id: {0}")]
    WalletId(String),
}

/// Decode exactly `N` bytes from a hex string (either case).
pub(crate) fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], ParseError> {
    if s.len() != N * 2 {
        return Err(ParseError::HexLength {
            expected: N * 2,
            actual: s.len(),
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).map_err(|e| ParseError::Hex(e.to_string()))?;
    Ok(out)
}
