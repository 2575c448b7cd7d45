use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Chain, ValidationError};

const EVM_PREFIX: &str = "0x";
const EVM_HEX_LEN: usize = 40;
const BASE58_MIN_LEN: usize = 32;
const BASE58_MAX_LEN: usize = 44;

/// Lexical family of an on-chain address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// `0x` followed by 40 hex characters.
    Evm,
    /// 32-44 characters from the Base58 alphabet.
    Base58,
}

impl AddressFamily {
    /// Strict shape check. Returns the family the address belongs to, if any.
    ///
    /// This is the single predicate behind both address validation and
    /// network inference.
    pub fn classify(input: &str) -> Option<Self> {
        if is_evm_shape(input) {
            Some(Self::Evm)
        } else if is_base58_shape(input) {
            Some(Self::Base58)
        } else {
            None
        }
    }

    pub const fn chain(self) -> Chain {
        match self {
            Self::Evm => Chain::Bsc,
            Self::Base58 => Chain::Sol,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Base58 => "base58",
        }
    }
}

impl Display for AddressFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_evm_shape(input: &str) -> bool {
    input
        .strip_prefix(EVM_PREFIX)
        .is_some_and(|hex| hex.len() == EVM_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn is_base58_shape(input: &str) -> bool {
    (BASE58_MIN_LEN..=BASE58_MAX_LEN).contains(&input.len()) && input.bytes().all(is_base58_byte)
}

/// Base58 alphabet: ASCII alphanumerics minus `0`, `O`, `I`, `l`.
pub fn is_base58_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() && !matches!(byte, b'0' | b'O' | b'I' | b'l')
}

/// Returns true when the address passes the strict EVM or Base58 shape check.
pub fn is_valid_address(input: &str) -> bool {
    AddressFamily::classify(input).is_some()
}

/// An address that passed strict shape validation.
///
/// The original text is kept verbatim; EVM addresses are not case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    raw: String,
    family: AddressFamily,
}

impl Address {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let family =
            AddressFamily::classify(input).ok_or_else(|| ValidationError::InvalidAddress {
                value: input.to_owned(),
            })?;

        Ok(Self {
            raw: input.to_owned(),
            family,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn chain(&self) -> Chain {
        self.family.chain()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Address {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.raw
    }
}
