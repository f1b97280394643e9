//! Checksum address type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::network::Network;

/// A network-prefixed, checksum-encoded account address such as
/// `nano_1efa1gxbitary1urzix9h13nkzadtz71n3auyj7uztb8i4qbtipu8cxz61ee`.
///
/// Built by `custody_crypto::encode_address`; this type only carries the string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an already-encoded address string. No validation is performed.
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The network named by the prefix, if it is one we know.
    pub fn network(&self) -> Option<Network> {
        let end = self.0.find('_')?;
        Network::from_address_prefix(&self.0[..=end])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
