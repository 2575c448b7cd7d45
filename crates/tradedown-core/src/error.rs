use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Validation errors raised by the `tradedown-core` domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("address must be 0x + 40 hex characters or 32-44 base58 characters: '{value}'")]
    InvalidAddress { value: String },

    #[error("value '{value}' must be finite")]
    NonFiniteValue { value: String },
    #[error("value '{value}' must be non-negative")]
    NegativeValue { value: String },

    #[error("unit must contain ASCII letters only: '{value}'")]
    InvalidUnit { value: String },
}

/// Category of a failed line parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorKind {
    InvalidFormat,
    InvalidAddress,
    InvalidValue,
}

impl ParseErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidAddress => "INVALID_ADDRESS",
            Self::InvalidValue => "INVALID_VALUE",
        }
    }
}

/// Outcome of a line that could not be turned into a [`crate::Command`].
///
/// Carries no partial command data; the variant fields only echo the
/// offending input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("input does not match tradedown syntax: '{input}'")]
    InvalidFormat { input: String },

    #[error("invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("value '{value}' is not a valid number")]
    InvalidValue { value: String },
}

impl ParseFailure {
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidFormat { .. } => ParseErrorKind::InvalidFormat,
            Self::InvalidAddress { .. } => ParseErrorKind::InvalidAddress,
            Self::InvalidValue { .. } => ParseErrorKind::InvalidValue,
        }
    }

    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Serialize for ParseFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParseFailure", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ParseErrorKind::InvalidFormat.code(), "INVALID_FORMAT");
        assert_eq!(ParseErrorKind::InvalidAddress.code(), "INVALID_ADDRESS");
        assert_eq!(ParseErrorKind::InvalidValue.code(), "INVALID_VALUE");
    }

    #[test]
    fn failure_message_echoes_offending_text() {
        let failure = ParseFailure::InvalidAddress {
            address: String::from("0xdeadbeef"),
        };
        assert_eq!(failure.kind(), ParseErrorKind::InvalidAddress);
        assert!(failure.message().contains("0xdeadbeef"));

        let failure = ParseFailure::InvalidValue {
            value: String::from("1.2.3"),
        };
        assert!(failure.message().contains("1.2.3"));
    }

    #[test]
    fn failure_serializes_as_code_and_message() {
        let failure = ParseFailure::InvalidFormat {
            input: String::from("hello"),
        };
        let json = serde_json::to_value(&failure).expect("serializes");
        assert_eq!(json["code"], "INVALID_FORMAT");
        assert_eq!(
            json["message"],
            "input does not match tradedown syntax: 'hello'"
        );
    }
}
