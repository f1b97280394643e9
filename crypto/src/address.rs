//! Checksum addresses.
//!
//! Address format: prefix + base32(public_key, 52 chars) + base32(checksum, 8 chars)
//!
//! The public key is left-padded with 4 zero bits to 260 bits so it splits
//! evenly into 52 symbols. Checksum: 40-bit Blake2b of the public key with its
//! bytes reversed. Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz`
//! (not RFC 4648; avoids visually ambiguous 0/O, 2/Z, l/I, v).

use custody_types::{Address, Network, PublicKey};

use crate::hash::address_checksum;

/// Base32 alphabet (32 chars, avoids visually ambiguous 0/O, 2/Z, l/I, v).
const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Number of base32 characters for the public key (260 bits / 5).
const PUBKEY_CHARS: usize = 52;
/// Number of base32 characters for the checksum (40 bits / 5).
const CHECKSUM_CHARS: usize = 8;

/// Encode bytes as base32, left-padding with zero bits to a multiple of 5.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = num_chars * 5 - total_bits;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }

    result
}

/// Decode a base32 string into a fixed-size byte array, dropping the leading
/// pad bits. Returns `None` on invalid characters, wrong length, or non-zero
/// pad bits. Zero-allocation.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let expected_chars = (N * 8).div_ceil(5);
    if s.len() != expected_chars {
        return None;
    }
    let pad_bits = expected_chars * 5 - N * 8;

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for (i, c) in s.bytes().enumerate() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if i == 0 && pad_bits > 0 {
            if val >> (5 - pad_bits) != 0 {
                return None;
            }
            bits_in_buffer -= pad_bits;
        }
        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result[pos] = (buffer >> bits_in_buffer) as u8;
            pos += 1;
        }
    }

    (pos == N).then_some(result)
}

/// Encode a public key as a checksum address for `network`.
///
/// 1. Encode the public key as 52 base32 characters
/// 2. Compute the reversed 40-bit Blake2b checksum, encode as 8 characters
/// 3. Address = network prefix + encoded key + encoded checksum
pub fn encode_address(public_key: &PublicKey, network: Network) -> Address {
    let pubkey_encoded = encode_base32(public_key.as_bytes());
    let checksum_encoded = encode_base32(&address_checksum(public_key.as_bytes()));
    Address::new_unchecked(format!(
        "{}{}{}",
        network.address_prefix(),
        pubkey_encoded,
        checksum_encoded
    ))
}

/// Extract the network and public key from a checksum address.
///
/// Accepts `nano_`, legacy `xrb_` and `ban_` prefixes. Returns `None` if the
/// address is malformed or its checksum does not match.
pub fn decode_address(address: &str) -> Option<(Network, PublicKey)> {
    let split = address.find('_')? + 1;
    let (prefix, encoded) = address.split_at(split);
    let network = Network::from_address_prefix(prefix)?;
    if !encoded.is_ascii() || encoded.len() != PUBKEY_CHARS + CHECKSUM_CHARS {
        return None;
    }

    let (pubkey_encoded, checksum_encoded) = encoded.split_at(PUBKEY_CHARS);
    let pubkey_bytes: [u8; 32] = decode_base32_fixed(pubkey_encoded)?;
    let checksum_bytes: [u8; 5] = decode_base32_fixed(checksum_encoded)?;

    if checksum_bytes != address_checksum(&pubkey_bytes) {
        return None;
    }
    Some((network, PublicKey(pubkey_bytes)))
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_some()
}
