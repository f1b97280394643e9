//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (storage, work peers) sit behind traits. This crate
//! provides test-friendly implementations that:
//! - Behave deterministically and can be scripted programmatically
//! - Record what was asked of them for assertions
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod network;
pub mod store;

pub use network::{NullPeerTransport, PeerScript};
pub use store::NullStore;
