//! Account registry behaviour against the in-memory store.

use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

use custody_crypto::{derive_keypair, encode_address};
use custody_nullables::NullStore;
use custody_store::{AccountStore, StoreError, WalletStore};
use custody_types::{Account, Address, Network, Seed, Wallet, WalletId};
use custody_wallet::{
    AccountRegistry, LockError, LockGuard, RegistryConfig, WalletError, WalletLock,
};

/// Fixture seeds are the first 32 ASCII bytes of a reference string.
fn ascii_seed(reference: &str) -> String {
    hex::encode(&reference.as_bytes()[..32])
}

fn registry(network: Network) -> AccountRegistry<NullStore> {
    AccountRegistry::with_store(
        NullStore::new(),
        RegistryConfig {
            network,
            ..RegistryConfig::default()
        },
    )
}

fn nano() -> AccountRegistry<NullStore> {
    registry(Network::Nano)
}

/// The 64-byte `private || public` key the wallet derives at `index`.
fn expanded_key(wallet: &Wallet, index: u32) -> Vec<u8> {
    let kp = derive_keypair(&wallet.seed, index);
    let mut bytes = kp.private.as_bytes().to_vec();
    bytes.extend_from_slice(kp.public.as_bytes());
    bytes
}

fn indices(accounts: &[Account]) -> Vec<Option<u32>> {
    accounts.iter().map(|a| a.index).collect()
}

// ── wallet_create ───────────────────────────────────────────────────────

#[test]
fn wallet_create_makes_index_zero() {
    let registry = nano();
    let seed = ascii_seed("8d729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040b");
    let wallet = registry.wallet_create(&seed).unwrap();

    assert!(!wallet.encrypted);
    assert_eq!(wallet.seed.to_hex(), seed);

    let accounts = registry.accounts(Some(&wallet)).unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].index, Some(0));
    assert_eq!(
        accounts[0].address.as_str(),
        "nano_1efa1gxbitary1urzix9h13nkzadtz71n3auyj7uztb8i4qbtipu8cxz61ee"
    );
    assert!(accounts[0].work);
    assert_eq!(accounts[0].private_key, None);
}

#[test]
fn wallet_create_banano() {
    let registry = registry(Network::Banano);
    let seed = ascii_seed("bb729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040b");
    let wallet = registry.wallet_create(&seed).unwrap();

    let accounts = registry.accounts(Some(&wallet)).unwrap();
    assert_eq!(
        accounts[0].address.as_str(),
        "ban_33mhuqjxr166czm4y37xk7emfnt4zogxmqrhbfxyngrkbdchmpsk6qehhm3n"
    );
    assert_eq!(accounts[0].index, Some(0));
    assert!(accounts[0].work);
}

#[test]
fn wallet_create_rejects_bad_seeds() {
    let registry = nano();
    for bad in ["", "invalid seed", "a".repeat(63).as_str(), "g".repeat(64).as_str()] {
        assert!(
            matches!(registry.wallet_create(bad), Err(WalletError::InvalidSeed)),
            "accepted {bad:?}"
        );
    }
    assert!(registry.list_wallets().unwrap().is_empty());
    assert_eq!(registry.store().account_count(), 0);
}

#[test]
fn wallets_are_listed_and_fetched() {
    let registry = nano();
    let a = registry.wallet_create(&"11".repeat(32)).unwrap();
    let b = registry.wallet_create(&"22".repeat(32)).unwrap();

    assert_eq!(registry.get_wallet(&a.id).unwrap(), a);
    let listed: Vec<WalletId> = registry.list_wallets().unwrap().iter().map(|w| w.id).collect();
    assert_eq!(listed, vec![a.id, b.id]);
    assert!(matches!(
        registry.get_wallet(&WalletId::new()),
        Err(WalletError::Store(StoreError::NotFound(_)))
    ));
}

// ── account_create / accounts_create ────────────────────────────────────

#[test]
fn account_create_is_sequential() {
    let registry = nano();
    let seed = ascii_seed("5f729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040c");
    let wallet = registry.wallet_create(&seed).unwrap();

    let first = registry.account_create(Some(&wallet)).unwrap();
    assert_eq!(first.index, Some(1));
    assert_eq!(
        first.address.as_str(),
        "nano_3tdqk8ghsdfapzhrag5978izd19minorfmxergefkecdsbyxaw6og4fejs89"
    );

    let second = registry.account_create(Some(&wallet)).unwrap();
    assert_eq!(second.index, Some(2));
    assert_eq!(
        second.address.as_str(),
        "nano_1frwge7oebdn87jip7k3sa1uuyf4yxxjh8jg67i69r7smf7tddj1gr6yremf"
    );
}

#[test]
fn account_create_needs_a_wallet() {
    assert!(matches!(
        nano().account_create(None),
        Err(WalletError::InvalidWallet)
    ));
}

#[test]
fn accounts_create_batch() {
    let registry = nano();
    let seed = ascii_seed("9f729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040e");
    let wallet = registry.wallet_create(&seed).unwrap();

    let accounts = registry.accounts_create(Some(&wallet), 10).unwrap();
    let expected = [
        "nano_3hntkbk1q6pn1n8481shemojcmtpxxpjbojm7h5h5p6jz53bahjuif6d8j4f",
        "nano_1dh7j8bw1pi8xur1zste3c7oqc1ef3yttory4snhufb5haj1ctzxapgpqhzq",
        "nano_1qhc3k9p1dxb45f9jrsz3afydqdxoo8y4deeu75q34pmskjgyafq67fd5k1r",
        "nano_3cmpq338qbq6hhhijia6ack71kas64snza6r89zhspffzaimxnokaofpa1wt",
        "nano_319uakdyoq48h3zswtwt8ei7fjdq4mue3dizzz3fbgnteqb5zqeycygteerd",
        "nano_1xew8dmxca5fbo16hgg88p9sgfpamig1kdos5te68hkstj3kf4bi1cyb3qdt",
        "nano_33iiz1hkggxirkspip8hef9uiiguhay5ykjdydnyuresxxt1mkkrfz9qeiak",
        "nano_3gxjsq4b55fd6hmzroa7wgtmw7wy7nwjofspewzhdwdo5dck9sa85rnfujrn",
        "nano_3xoyiewop6gk4g8jaynkf7bhn5baciwtdppkkoprsbafmimcmaiywz6pjqt5",
        "nano_1pigk4bbfhpdg3u5b8sdhij8c78n66eap9478p4dhgamyqt7herco57z6ib7",
    ];
    assert_eq!(accounts.len(), 10);
    for (i, (account, want)) in accounts.iter().zip(expected).enumerate() {
        assert_eq!(account.index, Some(i as u32 + 1));
        assert_eq!(account.address.as_str(), want);
        assert_eq!(account.private_key, None);
    }

    let next = registry.accounts_create(Some(&wallet), 2).unwrap();
    assert_eq!(indices(&next), vec![Some(11), Some(12)]);
}

#[test]
fn accounts_create_bad_input() {
    let registry = nano();
    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();
    assert!(matches!(
        registry.accounts_create(None, 3),
        Err(WalletError::InvalidWallet)
    ));
    assert!(matches!(
        registry.accounts_create(Some(&wallet), 0),
        Err(WalletError::InvalidAccountCount)
    ));
    assert_eq!(registry.store().account_count(), 1);
}

#[test]
fn concurrent_account_create_never_collides() {
    let registry = nano();
    let wallet = registry.wallet_create(&"33".repeat(32)).unwrap();

    let created: Vec<u32> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..5)
                        .map(|_| registry.account_create(Some(&wallet)).unwrap().index.unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: BTreeSet<u32> = created.iter().copied().collect();
    assert_eq!(created.len(), 40);
    assert_eq!(unique, (1..=40).collect());
}

#[test]
fn concurrent_batches_stay_contiguous() {
    let registry = nano();
    let wallet = registry.wallet_create(&"44".repeat(32)).unwrap();

    let batches: Vec<Vec<Account>> = thread::scope(|s| {
        let handles: Vec<_> = (0..6)
            .map(|_| s.spawn(|| registry.accounts_create(Some(&wallet), 4).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for batch in &batches {
        let first = batch[0].index.unwrap();
        assert_eq!(
            indices(batch),
            (first..first + 4).map(Some).collect::<Vec<_>>()
        );
    }
    let all: BTreeSet<u32> = batches.iter().flatten().filter_map(|a| a.index).collect();
    assert_eq!(all, (1..=24).collect());
}

#[test]
fn wallets_do_not_block_each_other() {
    let registry = AccountRegistry::with_store(
        NullStore::new(),
        RegistryConfig {
            lock_timeout: Some(Duration::from_secs(5)),
            ..RegistryConfig::default()
        },
    );
    let a = registry.wallet_create(&"55".repeat(32)).unwrap();
    let b = registry.wallet_create(&"66".repeat(32)).unwrap();

    thread::scope(|s| {
        s.spawn(|| registry.accounts_create(Some(&a), 20).unwrap());
        s.spawn(|| registry.accounts_create(Some(&b), 20).unwrap());
    });

    assert_eq!(registry.accounts(Some(&a)).unwrap().len(), 21);
    assert_eq!(registry.accounts(Some(&b)).unwrap().len(), 21);
}

// ── adhoc_account_create ────────────────────────────────────────────────

const ADHOC_SEED: &str = "aa729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040d";
const ADHOC_KEY: &str = "1f729340e07eee69abac049c2fdd4a3c4b50e4672a2fabdf1ae295f2b4f3040d";
const ADHOC_EXPANDED: &str = "31663732393334306530376565653639616261633034396332666464346133632c9c941001f4236f487aac98848320ce746f7b809af76e5e795835ef30022424";
const ADHOC_ADDRESS: &str = "nano_1d6wkia15x35fx69od6rik3k3mmnfxxr38qqfsh9kp3oxwr16b36eztouu3a";

#[test]
fn adhoc_import_is_idempotent() {
    let registry = nano();
    let wallet = registry.wallet_create(&ascii_seed(ADHOC_SEED)).unwrap();

    let acct = registry.account_create(Some(&wallet)).unwrap();
    assert_eq!(acct.index, Some(1));
    assert_eq!(
        acct.address.as_str(),
        "nano_3suihcm3txrfcnipecixeu7kcdm8jisyb1osy14j1r5na1c17g7kkbbu143o"
    );

    let key = hex::decode(ADHOC_EXPANDED).unwrap();
    let first = registry.adhoc_account_create(Some(&wallet), &key).unwrap();
    assert!(first.created);
    assert_eq!(first.deterministic, None);
    assert_eq!(first.account.index, None);
    assert_eq!(first.account.address.as_str(), ADHOC_ADDRESS);
    assert_eq!(first.account.private_key.as_deref(), Some(ADHOC_EXPANDED));
    assert!(first.account.work);

    let again = registry.adhoc_account_create(Some(&wallet), &key).unwrap();
    assert!(!again.created);
    assert_eq!(again.account, first.account);
    assert_eq!(registry.store().account_count(), 3);
}

#[test]
fn adhoc_import_accepts_the_bare_secret() {
    let registry = nano();
    let wallet = registry.wallet_create(&ascii_seed(ADHOC_SEED)).unwrap();

    let import = registry
        .adhoc_account_create(Some(&wallet), &ADHOC_KEY.as_bytes()[..32])
        .unwrap();
    assert_eq!(import.account.address.as_str(), ADHOC_ADDRESS);
    assert_eq!(import.account.private_key.as_deref(), Some(ADHOC_EXPANDED));
}

#[test]
fn adhoc_import_of_existing_derivation_returns_it() {
    let registry = nano();
    let wallet = registry.wallet_create(&ascii_seed(ADHOC_SEED)).unwrap();
    let existing = registry.account_create(Some(&wallet)).unwrap();

    let import = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 1))
        .unwrap();

    assert!(!import.created);
    assert_eq!(import.account, existing);
    assert_eq!(import.deterministic.as_ref(), Some(&existing));
    assert_eq!(
        import.account.address.as_str(),
        "nano_3suihcm3txrfcnipecixeu7kcdm8jisyb1osy14j1r5na1c17g7kkbbu143o"
    );
    assert_eq!(registry.store().account_count(), 2);
}

#[test]
fn adhoc_import_materializes_a_future_derivation() {
    let registry = nano();
    let wallet = registry.wallet_create(&"77".repeat(32)).unwrap();

    let import = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 4))
        .unwrap();

    assert!(import.created);
    assert_eq!(import.account.index, Some(4));
    assert_eq!(import.account.private_key, None);
    assert_eq!(import.deterministic.as_ref(), Some(&import.account));

    let accounts = registry.accounts(Some(&wallet)).unwrap();
    assert_eq!(
        indices(&accounts),
        vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
    );
    assert!(accounts.iter().all(|a| !a.is_adhoc()));

    let next = registry.account_create(Some(&wallet)).unwrap();
    assert_eq!(next.index, Some(5));
}

#[test]
fn adhoc_lookahead_bounds_the_search() {
    let registry = AccountRegistry::with_store(
        NullStore::new(),
        RegistryConfig {
            adhoc_lookahead: 3,
            ..RegistryConfig::default()
        },
    );
    let wallet = registry.wallet_create(&"88".repeat(32)).unwrap();

    let beyond = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 10))
        .unwrap();
    assert!(beyond.account.is_adhoc());
    assert_eq!(beyond.deterministic, None);

    let within = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 3))
        .unwrap();
    assert_eq!(within.account.index, Some(3));
}

#[test]
fn allocation_adopts_a_key_imported_beyond_the_lookahead() {
    let registry = nano();
    let wallet = registry.wallet_create(&"99".repeat(32)).unwrap();
    let imported = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 150))
        .unwrap();
    assert!(imported.account.is_adhoc());
    assert_eq!(registry.store().account_count(), 2);

    let batch = registry.accounts_create(Some(&wallet), 200).unwrap();
    assert_eq!(batch.len(), 200);
    assert_eq!(batch[149].index, Some(150));
    assert_eq!(batch[149].address, imported.account.address);
    assert_eq!(registry.store().account_count(), 201);

    let accounts = registry.accounts(Some(&wallet)).unwrap();
    assert!(accounts.iter().all(|a| !a.is_adhoc()));
    assert_eq!(accounts[150].private_key, None);

    assert_eq!(
        registry.account_create(Some(&wallet)).unwrap().index,
        Some(201)
    );

    let again = registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 150))
        .unwrap();
    assert!(!again.created);
    assert_eq!(again.account.index, Some(150));
}

#[test]
fn single_allocation_adopts_the_next_imported_key() {
    let registry = AccountRegistry::with_store(
        NullStore::new(),
        RegistryConfig {
            adhoc_lookahead: 1,
            ..RegistryConfig::default()
        },
    );
    let wallet = registry.wallet_create(&"99".repeat(32)).unwrap();
    registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 3))
        .unwrap();
    registry.accounts_create(Some(&wallet), 2).unwrap();

    let third = registry.account_create(Some(&wallet)).unwrap();
    assert_eq!(third.index, Some(3));
    assert_eq!(
        indices(&registry.accounts(Some(&wallet)).unwrap()),
        vec![Some(0), Some(1), Some(2), Some(3)]
    );
    assert_eq!(
        registry.account_create(Some(&wallet)).unwrap().index,
        Some(4)
    );
}

#[test]
fn adhoc_import_bad_input() {
    let registry = nano();
    assert!(matches!(
        registry.adhoc_account_create(None, &[]),
        Err(WalletError::InvalidWallet)
    ));

    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();
    for bad in [&[][..], &[7u8; 31][..], &[7u8; 48][..]] {
        assert!(matches!(
            registry.adhoc_account_create(Some(&wallet), bad),
            Err(WalletError::InvalidPrivKey)
        ));
    }

    let mut mismatched = expanded_key(&wallet, 200);
    mismatched[40] ^= 0xFF;
    assert!(matches!(
        registry.adhoc_account_create(Some(&wallet), &mismatched),
        Err(WalletError::InvalidPrivKey)
    ));
}

// ── account_private_key ─────────────────────────────────────────────────

#[test]
fn private_keys_are_rederived_or_read_back() {
    let registry = nano();
    let wallet = registry.wallet_create(&ascii_seed(ADHOC_SEED)).unwrap();
    let deterministic = registry.account_create(Some(&wallet)).unwrap();
    let adhoc = registry
        .adhoc_account_create(Some(&wallet), &hex::decode(ADHOC_EXPANDED).unwrap())
        .unwrap()
        .account;

    let key = registry.account_private_key(&wallet, &deterministic).unwrap();
    assert_eq!(key.0, derive_keypair(&wallet.seed, 1).private.0);

    let key = registry.account_private_key(&wallet, &adhoc).unwrap();
    assert_eq!(&key.0[..], &ADHOC_KEY.as_bytes()[..32]);

    let other = Wallet::new(Seed::from_bytes([1; 32]));
    assert!(matches!(
        registry.account_private_key(&other, &adhoc),
        Err(WalletError::InvalidWallet)
    ));
}

#[test]
fn corrupted_adhoc_key_is_rejected() {
    let registry = nano();
    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();
    let mut adhoc = registry
        .adhoc_account_create(Some(&wallet), &hex::decode(ADHOC_EXPANDED).unwrap())
        .unwrap()
        .account;

    adhoc.private_key = Some("zz".into());
    assert!(matches!(
        registry.account_private_key(&wallet, &adhoc),
        Err(WalletError::InvalidPrivKey)
    ));
    adhoc.private_key = None;
    assert!(matches!(
        registry.account_private_key(&wallet, &adhoc),
        Err(WalletError::InvalidPrivKey)
    ));
}

// ── failure paths ───────────────────────────────────────────────────────

struct BusyLock;

impl WalletLock for BusyLock {
    fn acquire(&self, key: &str, timeout: Option<Duration>) -> Result<LockGuard, LockError> {
        Err(LockError::Timeout {
            key: key.to_string(),
            waited: timeout.unwrap_or_default(),
        })
    }
}

#[test]
fn lock_timeout_is_retryable_and_writes_nothing() {
    let registry = AccountRegistry::new(NullStore::new(), BusyLock, RegistryConfig::default());
    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();

    let err = registry.account_create(Some(&wallet)).unwrap_err();
    assert!(err.is_retryable());
    assert!(!err.is_fatal());
    assert!(registry.accounts_create(Some(&wallet), 3).is_err());
    assert!(registry
        .adhoc_account_create(Some(&wallet), &expanded_key(&wallet, 1))
        .is_err());
    assert_eq!(registry.store().account_count(), 1);
}

/// Reports no existing indices, so allocation restarts at 1 every time.
#[derive(Default)]
struct ForgetfulStore(NullStore);

impl WalletStore for ForgetfulStore {
    fn create_wallet(&self, wallet: &Wallet) -> Result<(), StoreError> {
        self.0.create_wallet(wallet)
    }

    fn get_wallet(&self, id: &WalletId) -> Result<Wallet, StoreError> {
        self.0.get_wallet(id)
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>, StoreError> {
        self.0.list_wallets()
    }
}

impl AccountStore for ForgetfulStore {
    fn create_account(&self, account: &Account) -> Result<(), StoreError> {
        self.0.create_account(account)
    }

    fn create_accounts(&self, accounts: &[Account]) -> Result<(), StoreError> {
        self.0.create_accounts(accounts)
    }

    fn accounts_by_wallet(&self, wallet_id: &WalletId) -> Result<Vec<Account>, StoreError> {
        self.0.accounts_by_wallet(wallet_id)
    }

    fn find_account_by_address(
        &self,
        wallet_id: &WalletId,
        address: &Address,
    ) -> Result<Option<Account>, StoreError> {
        self.0.find_account_by_address(wallet_id, address)
    }

    fn max_account_index(&self, _wallet_id: &WalletId) -> Result<Option<u32>, StoreError> {
        Ok(None)
    }
}

#[test]
fn duplicate_index_is_fatal() {
    let registry = AccountRegistry::with_store(ForgetfulStore::default(), RegistryConfig::default());
    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();
    registry.account_create(Some(&wallet)).unwrap();

    let err = registry.account_create(Some(&wallet)).unwrap_err();
    assert!(matches!(err, WalletError::IndexCollision { index: 1, .. }));
    assert!(err.is_fatal());
    assert!(!err.is_retryable());
    let err = registry.accounts_create(Some(&wallet), 3).unwrap_err();
    assert!(matches!(err, WalletError::IndexCollision { index: 1, .. }));
    assert_eq!(registry.store().0.account_count(), 2);
}

/// Accepts account rows but refuses every wallet row.
#[derive(Default)]
struct NoWalletsStore(NullStore);

impl WalletStore for NoWalletsStore {
    fn create_wallet(&self, _wallet: &Wallet) -> Result<(), StoreError> {
        Err(StoreError::Backend("wallet table unavailable".into()))
    }

    fn get_wallet(&self, id: &WalletId) -> Result<Wallet, StoreError> {
        self.0.get_wallet(id)
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>, StoreError> {
        self.0.list_wallets()
    }
}

impl AccountStore for NoWalletsStore {
    fn create_account(&self, account: &Account) -> Result<(), StoreError> {
        self.0.create_account(account)
    }

    fn create_accounts(&self, accounts: &[Account]) -> Result<(), StoreError> {
        self.0.create_accounts(accounts)
    }

    fn accounts_by_wallet(&self, wallet_id: &WalletId) -> Result<Vec<Account>, StoreError> {
        self.0.accounts_by_wallet(wallet_id)
    }

    fn find_account_by_address(
        &self,
        wallet_id: &WalletId,
        address: &Address,
    ) -> Result<Option<Account>, StoreError> {
        self.0.find_account_by_address(wallet_id, address)
    }
}

#[test]
fn failed_wallet_write_leaves_no_wallet_behind() {
    let registry = AccountRegistry::with_store(NoWalletsStore::default(), RegistryConfig::default());
    let err = registry.wallet_create(&"11".repeat(32)).unwrap_err();
    assert!(matches!(err, WalletError::Store(StoreError::Backend(_))));
    assert!(registry.list_wallets().unwrap().is_empty());
}

#[test]
fn lock_slots_are_released_after_every_operation() {
    let registry = nano();
    let wallets: Vec<Wallet> = (1..=20u8)
        .map(|n| registry.wallet_create(&format!("{n:02x}").repeat(32)).unwrap())
        .collect();

    thread::scope(|s| {
        for wallet in &wallets {
            let registry = &registry;
            s.spawn(move || {
                registry.account_create(Some(wallet)).unwrap();
                registry.accounts_create(Some(wallet), 2).unwrap();
                registry
                    .adhoc_account_create(Some(wallet), &expanded_key(wallet, 5))
                    .unwrap();
            });
        }
    });

    assert!(registry.lock().is_empty());
}

#[test]
fn addresses_follow_the_configured_network() {
    let registry = registry(Network::Banano);
    let wallet = registry.wallet_create(&"11".repeat(32)).unwrap();
    let account = registry.account_create(Some(&wallet)).unwrap();
    let kp = derive_keypair(&wallet.seed, 1);
    assert_eq!(account.address, encode_address(&kp.public, Network::Banano));
    assert!(account.address.as_str().starts_with("ban_"));
}
