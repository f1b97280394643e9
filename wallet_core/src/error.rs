use custody_store::StoreError;
use custody_types::WalletId;
use thiserror::Error;

use crate::lock::LockError;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid seed")]
    InvalidSeed,

    #[error("invalid wallet")]
    InvalidWallet,

    #[error("invalid private key")]
    InvalidPrivKey,

    #[error("invalid account count")]
    InvalidAccountCount,

    #[error("account index space exhausted for wallet {0}")]
    IndexExhausted(WalletId),

    #[error("account index {index} already exists in wallet {wallet}")]
    IndexCollision { wallet: WalletId, index: u32 },

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl WalletError {
    /// Whether retrying the same call later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Lock(LockError::Timeout { .. }))
    }

    /// Whether this signals a broken invariant rather than bad input or a
    /// transient condition.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::IndexCollision { .. } | Self::Lock(LockError::Poisoned))
    }
}
