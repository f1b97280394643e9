//! Local proof-of-work checks.
//!
//! A work value is 8 bytes, written as 16 hex characters (big-endian). Its
//! value against a block is the 8-byte Blake2b of `work (little-endian) ||
//! block hash`, read as a little-endian integer.

use custody_crypto::blake2b_64_multi;
use custody_types::BlockHash;

fn parse_hex_u64(s: &str) -> Option<u64> {
    if s.len() != 16 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(s, 16).ok()
}

/// Parse a 16-hex-character work value.
pub fn parse_work(s: &str) -> Option<u64> {
    parse_hex_u64(s)
}

/// Parse a 16-hex-character difficulty threshold.
pub fn parse_difficulty(s: &str) -> Option<u64> {
    parse_hex_u64(s)
}

/// The difficulty value `work` achieves for `hash`.
pub fn work_value(hash: &BlockHash, work: u64) -> u64 {
    u64::from_le_bytes(blake2b_64_multi(&[&work.to_le_bytes(), hash.as_bytes()]))
}

/// Whether `work` meets `difficulty` for `hash`.
pub fn validate_work(hash: &BlockHash, work: u64, difficulty: u64) -> bool {
    work_value(hash, work) >= difficulty
}
