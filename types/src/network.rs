//! Network identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Which currency network addresses are encoded for.
///
/// Both networks share the derivation algorithm and differ only in the
/// address prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Nano,
    Banano,
}

impl Network {
    /// Address prefix, including the trailing underscore.
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Self::Nano => "nano_",
            Self::Banano => "ban_",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Banano => "banano",
        }
    }

    /// Resolve the network from an address prefix. The legacy `xrb_` prefix
    /// maps to [`Network::Nano`].
    pub fn from_address_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "nano_" | "xrb_" => Some(Self::Nano),
            "ban_" => Some(Self::Banano),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nano" => Ok(Self::Nano),
            "banano" | "ban" => Ok(Self::Banano),
            other => Err(ParseError::UnknownNetwork(other.to_string())),
        }
    }
}
