//! Blake2b hashing at the output sizes the wallet needs.

use blake2::digest::consts::{U32, U5, U64, U8};
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;
type Blake2b64 = Blake2b<U8>;
type Blake2b40 = Blake2b<U5>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    blake2b_256_multi(&[data])
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a 512-bit Blake2b hash, used to expand ed25519 secrets.
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// 64-bit Blake2b over several parts. Proof-of-work values are computed with it.
pub fn blake2b_64_multi(parts: &[&[u8]]) -> [u8; 8] {
    let mut hasher = Blake2b64::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 8];
    output.copy_from_slice(&result);
    output
}

/// Address checksum: 40-bit Blake2b of the public key, bytes reversed.
///
/// Note this is a native 5-byte digest, not a truncated 256-bit one; the
/// output length is part of the Blake2b parameter block.
pub fn address_checksum(public_key: &[u8; 32]) -> [u8; 5] {
    let mut hasher = Blake2b40::new();
    hasher.update(public_key);
    let result = hasher.finalize();
    let mut out = [0u8; 5];
    out.copy_from_slice(&result);
    out.reverse();
    out
}
