//! Key derivation for the custody wallet core.
//!
//! - **Blake2b** for seed/index derivation, key expansion and address checksums
//! - **Ed25519-Blake2b** keypairs (ed25519 with Blake2b-512 in place of SHA-512)
//! - Checksum addresses with `nano_` / `ban_` prefixes and base32 encoding
//!
//! Everything here is pure: no state, no I/O apart from [`generate_seed`].

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;

pub use address::{decode_address, encode_address, validate_address};
pub use error::KeyError;
pub use hash::{address_checksum, blake2b_256, blake2b_256_multi, blake2b_512, blake2b_64_multi};
pub use keys::{
    derive_keypair, derive_private_key, generate_seed, keypair_from_private, parse_seed,
    public_from_private, validate_private_key, validate_seed,
};
