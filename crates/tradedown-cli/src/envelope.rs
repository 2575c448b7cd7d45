use serde::Serialize;
use tradedown_core::{Command, ParseFailure};

use crate::metadata::Metadata;

/// Response envelope for every machine-readable `tradedown` output.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub meta: Metadata,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<EnvelopeError>,
}

impl<T> Envelope<T> {
    pub fn with_errors(meta: Metadata, data: T, errors: Vec<EnvelopeError>) -> Self {
        Self { meta, data, errors }
    }
}

/// Structured error entry. `line` is set when the error belongs to an input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl EnvelopeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn from_failure(failure: &ParseFailure, line: usize) -> Self {
        Self::new(failure.code(), failure.message()).at_line(line)
    }
}

/// Outcome of one input line.
#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ParseFailure>,
}

impl LineReport {
    pub fn new(line: usize, input: impl Into<String>, outcome: Result<Command, ParseFailure>) -> Self {
        let (command, error) = match outcome {
            Ok(command) => (Some(command), None),
            Err(failure) => (None, Some(failure)),
        };

        Self {
            line,
            input: input.into(),
            command,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.command.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_exactly_one_outcome() {
        let ok = LineReport::new(1, "x", tradedown_core::parse(tradedown_core::DEMO_LINES[0]));
        assert!(ok.is_ok());
        assert!(ok.error.is_none());

        let failed = LineReport::new(2, "nope", tradedown_core::parse("nope"));
        assert!(!failed.is_ok());
        assert!(failed.command.is_none());
    }

    #[test]
    fn failure_maps_to_envelope_error_with_line() {
        let failure = tradedown_core::parse("nope").expect_err("must fail");
        let error = EnvelopeError::from_failure(&failure, 7);
        assert_eq!(error.code, "INVALID_FORMAT");
        assert_eq!(error.line, Some(7));
    }
}
