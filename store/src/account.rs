//! Account storage trait.

use crate::StoreError;
use custody_types::{Account, Address, WalletId};

/// Trait for account storage operations.
///
/// Backends must guarantee uniqueness of `(wallet_id, address)`.
pub trait AccountStore: Send + Sync {
    /// Persist a new account. Fails with [`StoreError::Duplicate`] if the
    /// wallet already owns an account with the same address.
    fn create_account(&self, account: &Account) -> Result<(), StoreError>;

    /// Persist a batch of deterministic accounts as one unit: every row is
    /// written or none is.
    ///
    /// An adhoc row holding one of the batch's addresses is the same key, and
    /// is rewritten in place as the deterministic account. Any other existing
    /// address fails the whole batch with [`StoreError::Duplicate`].
    fn create_accounts(&self, accounts: &[Account]) -> Result<(), StoreError>;

    /// All accounts of a wallet: deterministic accounts by ascending index,
    /// then adhoc accounts in creation order.
    fn accounts_by_wallet(&self, wallet_id: &WalletId) -> Result<Vec<Account>, StoreError>;

    /// The wallet's account with this address, if any.
    fn find_account_by_address(
        &self,
        wallet_id: &WalletId,
        address: &Address,
    ) -> Result<Option<Account>, StoreError>;

    /// Highest deterministic index of the wallet, or `None` if it has no
    /// deterministic accounts.
    fn max_account_index(&self, wallet_id: &WalletId) -> Result<Option<u32>, StoreError> {
        Ok(self
            .accounts_by_wallet(wallet_id)?
            .iter()
            .filter_map(|a| a.index)
            .max())
    }
}
