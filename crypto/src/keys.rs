//! Deterministic ed25519-blake2b key derivation.
//!
//! A wallet seed and an account index produce the account's private key:
//!
//! ```text
//! private = Blake2b-256(seed || index as 4 big-endian bytes)
//! ```
//!
//! The public key is the ed25519 public key for that private key, with the
//! secret expanded by Blake2b-512 instead of SHA-512.

use custody_types::{KeyPair, PrivateKey, PublicKey, Seed};
use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::VerifyingKey;
use zeroize::Zeroize;

use crate::hash::{blake2b_256_multi, blake2b_512};
use crate::KeyError;

/// Derive the private key at `index` for `seed`.
pub fn derive_private_key(seed: &Seed, index: u32) -> PrivateKey {
    PrivateKey(blake2b_256_multi(&[seed.as_bytes(), &index.to_be_bytes()]))
}

/// Derive the public key for a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let mut expanded = blake2b_512(private.as_bytes());
    let secret = ExpandedSecretKey::from_bytes(&expanded);
    expanded.zeroize();
    let verifying_key = VerifyingKey::from(&secret);
    PublicKey(verifying_key.to_bytes())
}

/// Derive the account key pair at `index` for `seed`. Bit-exact and pure.
pub fn derive_keypair(seed: &Seed, index: u32) -> KeyPair {
    let private = derive_private_key(seed, index);
    let public = public_from_private(&private);
    KeyPair { public, private }
}

/// Reconstruct a key pair from raw private key bytes.
///
/// Accepts either the 32-byte secret, or the 64-byte `secret || public`
/// layout. The 64-byte form is rejected if its public half does not match.
pub fn keypair_from_private(bytes: &[u8]) -> Result<KeyPair, KeyError> {
    let (secret, claimed_public) = match bytes.len() {
        32 => (bytes, None),
        64 => (&bytes[..32], Some(&bytes[32..])),
        other => return Err(KeyError::InvalidLength(other)),
    };

    let mut raw = [0u8; 32];
    raw.copy_from_slice(secret);
    let private = PrivateKey(raw);
    raw.zeroize();

    let public = public_from_private(&private);
    if let Some(claimed) = claimed_public {
        if claimed != public.as_bytes() {
            return Err(KeyError::PublicKeyMismatch);
        }
    }
    Ok(KeyPair { public, private })
}

/// Whether `bytes` decode to a usable private key. Empty input is invalid.
pub fn validate_private_key(bytes: &[u8]) -> bool {
    keypair_from_private(bytes).is_ok()
}

/// Whether `s` is exactly 64 hex characters (32 bytes).
pub fn validate_seed(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 64-hex-character seed.
pub fn parse_seed(s: &str) -> Result<Seed, KeyError> {
    if !validate_seed(s) {
        return Err(KeyError::InvalidSeed);
    }
    s.parse().map_err(|_| KeyError::InvalidSeed)
}

/// Generate a fresh seed from the operating system's secure random source.
pub fn generate_seed() -> Result<Seed, KeyError> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| KeyError::Entropy(e.to_string()))?;
    let seed = Seed::from_bytes(bytes);
    bytes.zeroize();
    Ok(seed)
}
