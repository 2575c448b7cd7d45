use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Action, ValidationError};

/// Lower-cased alphabetic unit token (`bnb`, `sol`, `token`, ...).
///
/// Units are not checked against a whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() || !input.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidUnit {
                value: input.to_owned(),
            });
        }

        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Lower-case `raw`, falling back to the action's default unit when empty.
    pub fn normalize(raw: &str, action: Action) -> Result<Self, ValidationError> {
        match (raw.is_empty(), action.default_unit()) {
            (true, Some(default)) => Self::parse(default),
            _ => Self::parse(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Unit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        value.0
    }
}

/// Quantity attached to a buy or sell: the number, whether it is a
/// percentage, and its unit. Always present or absent as a whole.
///
/// `value` is finite and non-negative; deserialization goes through
/// [`Amount::new`] as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAmount")]
pub struct Amount {
    value: f64,
    is_percent: bool,
    unit: Unit,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAmount {
    value: f64,
    is_percent: bool,
    unit: Unit,
}

impl TryFrom<RawAmount> for Amount {
    type Error = ValidationError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.is_percent, raw.unit)
    }
}

impl Amount {
    pub fn new(value: f64, is_percent: bool, unit: Unit) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                value: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue {
                value: value.to_string(),
            });
        }

        Ok(Self {
            value,
            is_percent,
            unit,
        })
    }

    /// Convert a matched numeric literal into a finite, non-negative number.
    pub fn parse_value(text: &str) -> Result<f64, ValidationError> {
        let value = text
            .parse::<f64>()
            .map_err(|_| ValidationError::NonFiniteValue {
                value: text.to_owned(),
            })?;

        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                value: text.to_owned(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue {
                value: text.to_owned(),
            });
        }

        Ok(value)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_percent(&self) -> bool {
        self.is_percent
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)?;
        if self.is_percent {
            f.write_str("%")?;
        }
        f.write_str(self.unit.as_str())
    }
}
