use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// What the command asks the downstream engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Query,
}

impl Action {
    /// Map a transactional operator to its action. `+` buys, `-` sells.
    pub const fn from_operator(op: char) -> Option<Self> {
        match op {
            '+' => Some(Self::Buy),
            '-' => Some(Self::Sell),
            _ => None,
        }
    }

    pub const fn operator(self) -> Option<char> {
        match self {
            Self::Buy => Some('+'),
            Self::Sell => Some('-'),
            Self::Query => None,
        }
    }

    /// Unit applied when a buy/sell line omits one.
    pub const fn default_unit(self) -> Option<&'static str> {
        match self {
            Self::Buy => Some("bnb"),
            Self::Sell => Some("token"),
            Self::Query => None,
        }
    }

    pub const fn is_transactional(self) -> bool {
        matches!(self, Self::Buy | Self::Sell)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Query => "query",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
