//! Loose shape matching that splits a line into raw fields.
//!
//! The address class here over-accepts (any 32-44 ASCII alphanumerics);
//! the parser re-checks the extracted address with the strict predicate.

use std::sync::LazyLock;

use regex::Regex;

use crate::Action;

const ADDRESS_PATTERN: &str = r"(?:[a-zA-Z0-9]{32,44}|0x[0-9a-fA-F]{40})";

/// Groups: 1=address 2=operator 3=value 4=percent 5=unit.
static TRANSACTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^({ADDRESS_PATTERN})\s*([+\-])\s*([0-9]+(?:\.[0-9]+)?)(%?)\s*([a-zA-Z]*)$"
    );
    Regex::new(&pattern).expect("transactional grammar must compile")
});

static QUERY: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^({ADDRESS_PATTERN})$");
    Regex::new(&pattern).expect("query grammar must compile")
});

/// Raw substrings of a buy/sell line, borrowed from the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionalFields<'a> {
    pub address: &'a str,
    pub action: Action,
    pub value: &'a str,
    pub percent: bool,
    pub unit: &'a str,
}

/// Which surface form a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineForm<'a> {
    Transactional(TransactionalFields<'a>),
    Query { address: &'a str },
}

impl<'a> LineForm<'a> {
    pub fn address(&self) -> &'a str {
        match self {
            Self::Transactional(fields) => fields.address,
            Self::Query { address } => *address,
        }
    }
}

/// Classify a line. Leading and trailing whitespace is ignored.
///
/// Returns `None` when the line matches neither form.
pub fn match_line(line: &str) -> Option<LineForm<'_>> {
    let trimmed = line.trim();

    if let Some(captures) = TRANSACTIONAL.captures(trimmed) {
        let group = |index: usize| captures.get(index).map_or("", |m| m.as_str());
        let action = group(2).chars().next().and_then(Action::from_operator)?;

        return Some(LineForm::Transactional(TransactionalFields {
            address: group(1),
            action,
            value: group(3),
            percent: group(4) == "%",
            unit: group(5),
        }));
    }

    QUERY
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|m| LineForm::Query {
            address: m.as_str(),
        })
}
