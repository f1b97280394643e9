//! Custodial wallet core.
//!
//! - Wallet creation from a seed, with its index-0 account
//! - Sequential deterministic accounts, allocated under a per-wallet lock
//! - Import of foreign private keys, resolved against the seed's own
//!   derivations before being stored as adhoc accounts

pub mod error;
pub mod lock;
pub mod registry;

pub use error::WalletError;
pub use lock::{KeyedLock, LockError, LockGuard, WalletLock};
pub use registry::{AccountRegistry, AdhocImport, RegistryConfig, DEFAULT_ADHOC_LOOKAHEAD};
