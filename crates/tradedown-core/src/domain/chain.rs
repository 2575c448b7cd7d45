use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::AddressFamily;

/// Network inferred from address shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// BNB Smart Chain, assumed for every EVM-style address.
    Bsc,
    /// Solana, for Base58-style addresses.
    Sol,
    Unknown,
}

impl Chain {
    /// Infer the network from the address shape alone. No registry lookup.
    pub fn detect(address: &str) -> Self {
        AddressFamily::classify(address).map_or(Self::Unknown, AddressFamily::chain)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bsc => "bsc",
            Self::Sol => "sol",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
