//! Network difficulty thresholds.
//!
//! A work value must be at least the threshold for the block being worked.
//! Receive blocks carry a lower threshold than sends on Nano; Banano uses a
//! single threshold for everything.

use custody_types::Network;

/// Which side of a transfer the block is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkKind {
    /// Send, change and epoch blocks.
    Send,
    /// Receive and open blocks.
    Receive,
}

const NANO_SEND_THRESHOLD: u64 = 0xFFFF_FFF8_0000_0000;
const NANO_RECEIVE_THRESHOLD: u64 = 0xFFFF_FE00_0000_0000;
const BANANO_THRESHOLD: u64 = 0xFFFF_FE00_0000_0000;

/// Default threshold for `kind` on `network`.
pub fn default_difficulty(network: Network, kind: WorkKind) -> u64 {
    match (network, kind) {
        (Network::Nano, WorkKind::Send) => NANO_SEND_THRESHOLD,
        (Network::Nano, WorkKind::Receive) => NANO_RECEIVE_THRESHOLD,
        (Network::Banano, _) => BANANO_THRESHOLD,
    }
}

/// Scale a threshold by `multiplier`: higher multiplier = harder work.
///
/// The "difficulty inverse" `u64::MAX - threshold` is divided by the
/// multiplier. A zero base stays zero.
pub fn multiply(base: u64, multiplier: f64) -> u64 {
    if base == 0 || multiplier <= 0.0 {
        return base;
    }
    let difficulty_inv = u64::MAX - base;
    let scaled_inv = (difficulty_inv as f64 / multiplier) as u64;
    u64::MAX - scaled_inv
}

/// The 16-character lowercase hex form peers expect.
pub fn format_difficulty(difficulty: u64) -> String {
    format!("{difficulty:016x}")
}
