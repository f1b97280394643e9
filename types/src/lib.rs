//! Fundamental types for the custody wallet core.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! seeds and keys, checksum addresses, networks, block hashes, and the
//! wallet/account entities the registry hands out.

pub mod account;
pub mod address;
pub mod block;
pub mod error;
pub mod keys;
pub mod network;
pub mod wallet;

pub use account::Account;
pub use address::Address;
pub use block::BlockHash;
pub use error::ParseError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Seed};
pub use network::Network;
pub use wallet::{Wallet, WalletId};
