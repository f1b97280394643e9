//! Wallet entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ParseError;
use crate::keys::Seed;

/// Opaque unique wallet handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(Uuid);

impl WalletId {
    /// A fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WalletId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for WalletId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| ParseError::WalletId(e.to_string()))
    }
}

/// A wallet: a seed plus the accounts derived from or imported into it.
///
/// The seed never changes after creation. `encrypted` is owned by whatever
/// layer encrypts seeds at rest; the registry only initialises it to `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub seed: Seed,
    pub encrypted: bool,
}

impl Wallet {
    /// A new, unencrypted wallet with a fresh identifier.
    pub fn new(seed: Seed) -> Self {
        Self {
            id: WalletId::new(),
            seed,
            encrypted: false,
        }
    }
}
