//! Wallet and account lifecycle.
//!
//! Deterministic accounts are numbered from 0 without gaps. Index 0 is
//! created with the wallet; later indices are allocated under the wallet's
//! lock so concurrent callers never pick the same one. Imported (adhoc)
//! keys are checked against the wallet's own derivations first, so a key the
//! seed can reproduce always resolves to its deterministic account.

use std::time::Duration;

use custody_crypto::{derive_keypair, encode_address, keypair_from_private, parse_seed};
use custody_store::{Store, StoreError};
use custody_types::{Account, KeyPair, Network, PrivateKey, Wallet, WalletId};
use tracing::{debug, error, info};

use crate::error::WalletError;
use crate::lock::{KeyedLock, LockGuard, WalletLock};

/// How far past the highest existing index an imported key is searched for.
pub const DEFAULT_ADHOC_LOOKAHEAD: u32 = 100;

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Address prefix for every account this registry creates.
    pub network: Network,
    /// Longest wait for a wallet lock. `None` waits forever.
    pub lock_timeout: Option<Duration>,
    pub adhoc_lookahead: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            network: Network::Nano,
            lock_timeout: None,
            adhoc_lookahead: DEFAULT_ADHOC_LOOKAHEAD,
        }
    }
}

/// Outcome of importing a private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdhocImport {
    /// The account the key resolved to.
    pub account: Account,
    /// Set when the key is one of the wallet's own derivations; the import
    /// then yields that deterministic account instead of an adhoc one.
    pub deterministic: Option<Account>,
    /// Whether this call wrote any rows.
    pub created: bool,
}

pub struct AccountRegistry<S, L = KeyedLock> {
    store: S,
    lock: L,
    config: RegistryConfig,
}

impl<S: Store> AccountRegistry<S, KeyedLock> {
    /// A registry with the in-process lock.
    pub fn with_store(store: S, config: RegistryConfig) -> Self {
        Self::new(store, KeyedLock::new(), config)
    }
}

impl<S: Store, L: WalletLock> AccountRegistry<S, L> {
    pub fn new(store: S, lock: L, config: RegistryConfig) -> Self {
        Self {
            store,
            lock,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn lock(&self) -> &L {
        &self.lock
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create a wallet from a 64-hex-character seed, together with its
    /// index-0 account.
    pub fn wallet_create(&self, seed: &str) -> Result<Wallet, WalletError> {
        let seed = parse_seed(seed).map_err(|_| WalletError::InvalidSeed)?;
        let wallet = Wallet::new(seed);

        // Index 0 is written first so a stored wallet always has it.
        let account = self.derive_account(&wallet, 0);
        self.persist_derived(&wallet.id, std::slice::from_ref(&account))?;
        self.store.create_wallet(&wallet)?;
        info!(wallet = %wallet.id, address = %account.address, "wallet created");
        Ok(wallet)
    }

    /// Create the wallet's next deterministic account.
    pub fn account_create(&self, wallet: Option<&Wallet>) -> Result<Account, WalletError> {
        let wallet = wallet.ok_or(WalletError::InvalidWallet)?;
        let mut created = self.allocate(wallet, 1)?;
        created.pop().ok_or(WalletError::InvalidAccountCount)
    }

    /// Create `count` consecutive deterministic accounts, ascending by index.
    /// The batch is allocated under a single lock acquisition.
    pub fn accounts_create(
        &self,
        wallet: Option<&Wallet>,
        count: u32,
    ) -> Result<Vec<Account>, WalletError> {
        let wallet = wallet.ok_or(WalletError::InvalidWallet)?;
        if count == 0 {
            return Err(WalletError::InvalidAccountCount);
        }
        self.allocate(wallet, count)
    }

    /// Import a private key (32 bytes, or 64 bytes `private || public`).
    ///
    /// An address the wallet already owns is returned unchanged. A key the
    /// seed derives within the lookahead window resolves to that
    /// deterministic account, materializing any missing indices up to it.
    /// Anything else is stored as a new adhoc account.
    pub fn adhoc_account_create(
        &self,
        wallet: Option<&Wallet>,
        private_key: &[u8],
    ) -> Result<AdhocImport, WalletError> {
        let wallet = wallet.ok_or(WalletError::InvalidWallet)?;
        let keypair = keypair_from_private(private_key).map_err(|_| WalletError::InvalidPrivKey)?;
        let address = encode_address(&keypair.public, self.config.network);

        let _guard = self.lock_wallet(&wallet.id)?;

        if let Some(existing) = self.store.find_account_by_address(&wallet.id, &address)? {
            debug!(wallet = %wallet.id, %address, "imported key already present");
            let deterministic = (!existing.is_adhoc()).then(|| existing.clone());
            return Ok(AdhocImport {
                account: existing,
                deterministic,
                created: false,
            });
        }

        let max = self.store.max_account_index(&wallet.id)?;
        if let Some(index) = self.find_derivation(wallet, &keypair, max) {
            let first = match max {
                Some(max) if index <= max => index,
                Some(max) => max + 1,
                None => 0,
            };
            let accounts: Vec<Account> = (first..=index)
                .map(|i| self.derive_account(wallet, i))
                .collect();
            self.persist_derived(&wallet.id, &accounts)?;
            let account = accounts
                .into_iter()
                .last()
                .ok_or(WalletError::InvalidPrivKey)?;
            info!(
                wallet = %wallet.id,
                index,
                address = %account.address,
                "imported key matches a derived account"
            );
            return Ok(AdhocImport {
                deterministic: Some(account.clone()),
                account,
                created: true,
            });
        }

        let account = Account::adhoc(wallet.id, address, keypair.public, keypair.expanded_hex());
        self.store.create_account(&account)?;
        info!(wallet = %wallet.id, address = %account.address, "adhoc account imported");
        Ok(AdhocImport {
            account,
            deterministic: None,
            created: true,
        })
    }

    pub fn get_wallet(&self, id: &WalletId) -> Result<Wallet, WalletError> {
        Ok(self.store.get_wallet(id)?)
    }

    pub fn list_wallets(&self) -> Result<Vec<Wallet>, WalletError> {
        Ok(self.store.list_wallets()?)
    }

    /// Deterministic accounts by ascending index, then adhoc accounts in
    /// import order.
    pub fn accounts(&self, wallet: Option<&Wallet>) -> Result<Vec<Account>, WalletError> {
        let wallet = wallet.ok_or(WalletError::InvalidWallet)?;
        Ok(self.store.accounts_by_wallet(&wallet.id)?)
    }

    /// The signing key of `account`: re-derived for deterministic accounts,
    /// read back from storage for adhoc ones.
    pub fn account_private_key(
        &self,
        wallet: &Wallet,
        account: &Account,
    ) -> Result<PrivateKey, WalletError> {
        if account.wallet_id != wallet.id {
            return Err(WalletError::InvalidWallet);
        }
        if let Some(index) = account.index {
            return Ok(derive_keypair(&wallet.seed, index).private);
        }
        let stored = account
            .private_key
            .as_deref()
            .ok_or(WalletError::InvalidPrivKey)?;
        let bytes = hex::decode(stored).map_err(|_| WalletError::InvalidPrivKey)?;
        let keypair = keypair_from_private(&bytes).map_err(|_| WalletError::InvalidPrivKey)?;
        if keypair.public != account.public_key {
            return Err(WalletError::InvalidPrivKey);
        }
        Ok(keypair.private)
    }

    /// Allocate `count` indices after the current maximum and persist them,
    /// all under one lock acquisition.
    fn allocate(&self, wallet: &Wallet, count: u32) -> Result<Vec<Account>, WalletError> {
        let _guard = self.lock_wallet(&wallet.id)?;

        let max = self.store.max_account_index(&wallet.id)?.unwrap_or(0);
        let first = max
            .checked_add(1)
            .ok_or(WalletError::IndexExhausted(wallet.id))?;
        let last = first
            .checked_add(count - 1)
            .ok_or(WalletError::IndexExhausted(wallet.id))?;

        let accounts: Vec<Account> = (first..=last)
            .map(|i| self.derive_account(wallet, i))
            .collect();
        self.persist_derived(&wallet.id, &accounts)?;
        info!(wallet = %wallet.id, first, last, "accounts created");
        Ok(accounts)
    }

    /// Persist freshly allocated deterministic accounts as one batch.
    ///
    /// A key imported as adhoc before its index came up is the same account,
    /// and its row is taken over. Another deterministic row at one of the
    /// addresses means the index was handed out twice; nothing is written.
    fn persist_derived(&self, wallet_id: &WalletId, accounts: &[Account]) -> Result<(), WalletError> {
        for account in accounts {
            match self.store.find_account_by_address(wallet_id, &account.address)? {
                None => {}
                Some(existing) if existing.is_adhoc() => {
                    info!(
                        wallet = %wallet_id,
                        index = ?account.index,
                        address = %account.address,
                        "imported key reached by allocation, adopting it"
                    );
                }
                Some(_) => return Err(self.collision(wallet_id, account)),
            }
        }

        match self.store.create_accounts(accounts) {
            Err(StoreError::Duplicate(address)) => {
                match accounts.iter().find(|a| a.address.as_str() == address) {
                    Some(account) => Err(self.collision(wallet_id, account)),
                    None => Err(StoreError::Duplicate(address).into()),
                }
            }
            result => Ok(result?),
        }
    }

    fn collision(&self, wallet_id: &WalletId, account: &Account) -> WalletError {
        let index = account.index.unwrap_or_default();
        error!(
            wallet = %wallet_id,
            index,
            address = %account.address,
            "deterministic index collided with an existing account"
        );
        WalletError::IndexCollision {
            wallet: *wallet_id,
            index,
        }
    }

    /// The index in `0..=max + lookahead` whose derivation is `keypair`.
    fn find_derivation(&self, wallet: &Wallet, keypair: &KeyPair, max: Option<u32>) -> Option<u32> {
        let end = max
            .unwrap_or(0)
            .saturating_add(self.config.adhoc_lookahead);
        (0..=end).find(|&i| derive_keypair(&wallet.seed, i).public == keypair.public)
    }

    fn derive_account(&self, wallet: &Wallet, index: u32) -> Account {
        let keypair = derive_keypair(&wallet.seed, index);
        let address = encode_address(&keypair.public, self.config.network);
        Account::deterministic(wallet.id, index, address, keypair.public)
    }

    fn lock_wallet(&self, id: &WalletId) -> Result<LockGuard, WalletError> {
        self.lock
            .acquire(&id.to_string(), self.config.lock_timeout)
            .map_err(|e| {
                debug!(wallet = %id, error = %e, "wallet lock not acquired");
                WalletError::Lock(e)
            })
    }
}
