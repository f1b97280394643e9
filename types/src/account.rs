//! Account entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::Address;
use crate::keys::PublicKey;
use crate::wallet::WalletId;

/// An account owned by exactly one wallet.
///
/// Deterministic accounts carry `index: Some(i)` and never a private key: the
/// key is always re-derivable from the wallet seed and `i`. Adhoc accounts
/// carry `index: None` and the imported private key (128 hex characters,
/// `private || public`), since nothing else can reproduce it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub wallet_id: WalletId,
    pub index: Option<u32>,
    pub address: Address,
    pub public_key: PublicKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Proof-of-work handling is enabled for this account.
    pub work: bool,
}

impl Account {
    /// A deterministic account at `index`.
    pub fn deterministic(
        wallet_id: WalletId,
        index: u32,
        address: Address,
        public_key: PublicKey,
    ) -> Self {
        Self {
            wallet_id,
            index: Some(index),
            address,
            public_key,
            private_key: None,
            work: true,
        }
    }

    /// An adhoc account holding an imported private key.
    pub fn adhoc(
        wallet_id: WalletId,
        address: Address,
        public_key: PublicKey,
        private_key_hex: String,
    ) -> Self {
        Self {
            wallet_id,
            index: None,
            address,
            public_key,
            private_key: Some(private_key_hex),
            work: true,
        }
    }

    pub fn is_adhoc(&self) -> bool {
        self.index.is_none()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("wallet_id", &self.wallet_id)
            .field("index", &self.index)
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| ".."))
            .field("work", &self.work)
            .finish()
    }
}
