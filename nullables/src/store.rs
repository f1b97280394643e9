//! Nullable store: thread-safe in-memory storage for testing.

use custody_store::{AccountStore, StoreError, WalletStore};
use custody_types::{Account, Address, Wallet, WalletId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    /// Wallets in creation order.
    wallets: Vec<Wallet>,
    /// Accounts per wallet, in creation order.
    accounts: HashMap<WalletId, Vec<Account>>,
}

/// An in-memory wallet + account store for testing.
/// Thread-safe for use from many registry callers at once.
pub struct NullStore {
    inner: Mutex<Inner>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".into()))
    }

    /// Total number of stored accounts across all wallets (for assertions).
    pub fn account_count(&self) -> usize {
        self.lock()
            .map(|inner| inner.accounts.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore for NullStore {
    fn create_wallet(&self, wallet: &Wallet) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if inner.wallets.iter().any(|w| w.id == wallet.id) {
            return Err(StoreError::Duplicate(wallet.id.to_string()));
        }
        inner.wallets.push(wallet.clone());
        Ok(())
    }

    fn get_wallet(&self, id: &WalletId) -> Result<Wallet, StoreError> {
        self.lock()?
            .wallets
            .iter()
            .find(|w| w.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>, StoreError> {
        Ok(self.lock()?.wallets.clone())
    }
}

impl AccountStore for NullStore {
    fn create_account(&self, account: &Account) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let accounts = inner.accounts.entry(account.wallet_id).or_default();
        if accounts.iter().any(|a| a.address == account.address) {
            return Err(StoreError::Duplicate(account.address.to_string()));
        }
        accounts.push(account.clone());
        Ok(())
    }

    fn create_accounts(&self, accounts: &[Account]) -> Result<(), StoreError> {
        let mut inner = self.lock()?;

        // Check the whole batch before touching any row.
        let mut targets = Vec::with_capacity(accounts.len());
        for (n, account) in accounts.iter().enumerate() {
            let duplicate = || StoreError::Duplicate(account.address.to_string());
            if accounts[..n]
                .iter()
                .any(|a| a.wallet_id == account.wallet_id && a.address == account.address)
            {
                return Err(duplicate());
            }
            let rows = inner.accounts.get(&account.wallet_id);
            match rows.and_then(|rows| rows.iter().position(|a| a.address == account.address)) {
                None => targets.push(None),
                Some(pos) if account.index.is_some() && rows.is_some_and(|r| r[pos].is_adhoc()) => {
                    targets.push(Some(pos))
                }
                Some(_) => return Err(duplicate()),
            }
        }

        for (account, target) in accounts.iter().zip(targets) {
            let rows = inner.accounts.entry(account.wallet_id).or_default();
            match target {
                Some(pos) => rows[pos] = account.clone(),
                None => rows.push(account.clone()),
            }
        }
        Ok(())
    }

    fn accounts_by_wallet(&self, wallet_id: &WalletId) -> Result<Vec<Account>, StoreError> {
        let mut accounts = self
            .lock()?
            .accounts
            .get(wallet_id)
            .cloned()
            .unwrap_or_default();
        // Stable sort: `None` orders after every index, adhoc keeps insertion order.
        accounts.sort_by_key(|a| a.index.map_or((1, 0), |i| (0, i)));
        Ok(accounts)
    }

    fn find_account_by_address(
        &self,
        wallet_id: &WalletId,
        address: &Address,
    ) -> Result<Option<Account>, StoreError> {
        Ok(self
            .lock()?
            .accounts
            .get(wallet_id)
            .and_then(|accounts| accounts.iter().find(|a| a.address == *address))
            .cloned())
    }
}
