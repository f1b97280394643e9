//! Wallet storage trait.

use crate::StoreError;
use custody_types::{Wallet, WalletId};

/// Trait for wallet storage operations.
pub trait WalletStore: Send + Sync {
    /// Persist a new wallet. Fails with [`StoreError::Duplicate`] if the id exists.
    fn create_wallet(&self, wallet: &Wallet) -> Result<(), StoreError>;

    /// Fetch a wallet by id. Fails with [`StoreError::NotFound`] if absent.
    fn get_wallet(&self, id: &WalletId) -> Result<Wallet, StoreError>;

    /// All wallets, in creation order.
    fn list_wallets(&self) -> Result<Vec<Wallet>, StoreError>;
}
