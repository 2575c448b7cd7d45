use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Action, Address, Amount, Chain, ParseFailure};

/// Serialized discriminator carried by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandMode {
    Tradedown,
}

/// A successfully parsed tradedown line.
///
/// `amount` is `Some` exactly when the action is buy or sell; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    mode: CommandMode,
    action: Action,
    target: Address,
    chain: Chain,
    #[serde(flatten)]
    amount: Option<Amount>,
}

impl Command {
    /// Buy or sell. Returns `None` when `action` is [`Action::Query`].
    pub fn trade(action: Action, target: Address, amount: Amount) -> Option<Self> {
        if !action.is_transactional() {
            return None;
        }

        let chain = target.chain();
        Some(Self {
            mode: CommandMode::Tradedown,
            action,
            target,
            chain,
            amount: Some(amount),
        })
    }

    pub fn query(target: Address) -> Self {
        let chain = target.chain();
        Self {
            mode: CommandMode::Tradedown,
            action: Action::Query,
            target,
            chain,
            amount: None,
        }
    }

    pub fn mode(&self) -> CommandMode {
        self.mode
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn target(&self) -> &Address {
        &self.target
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn amount(&self) -> Option<&Amount> {
        self.amount.as_ref()
    }

    pub fn value(&self) -> Option<f64> {
        self.amount.as_ref().map(Amount::value)
    }

    pub fn is_percent(&self) -> Option<bool> {
        self.amount.as_ref().map(Amount::is_percent)
    }

    pub fn unit(&self) -> Option<&str> {
        self.amount.as_ref().map(|amount| amount.unit().as_str())
    }
}

/// Canonical line form; parses back to an equal command.
impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.target.as_str())?;
        if let (Some(op), Some(amount)) = (self.action.operator(), &self.amount) {
            write!(f, "{op}{amount}")?;
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = ParseFailure;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::parse(line)
    }
}
