//! # Tradedown Core
//!
//! Grammar and validation for tradedown, a one-line command language for
//! trading intents:
//!
//! ```text
//! ADDRESS OP VALUE[%] [UNIT]    buy (+) or sell (-)
//! ADDRESS                       query
//! ```
//!
//! Parsing runs in two stages. The [`grammar`] module splits a line into raw
//! fields with a deliberately loose address pattern; [`parse`] then applies
//! the strict address check, converts the value, normalizes the unit and
//! infers the chain from the address shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use tradedown_core::{parse, Action, Chain};
//!
//! let command = parse("0x098054c0c6ba84d95E2011946Db9a15BfFDB4444+0.5bnb").unwrap();
//! assert_eq!(command.action(), Action::Buy);
//! assert_eq!(command.chain(), Chain::Bsc);
//! assert_eq!(command.unit(), Some("bnb"));
//! ```
//!
//! ## Error Handling
//!
//! Failures are values. Exactly one rule applies per line, checked in order:
//!
//! ```rust
//! use tradedown_core::{parse, ParseErrorKind};
//!
//! let failure = parse("not a command").unwrap_err();
//! assert_eq!(failure.kind(), ParseErrorKind::InvalidFormat);
//! assert_eq!(failure.code(), "INVALID_FORMAT");
//! ```
//!
//! The parser holds no mutable state and performs no I/O; it can be called
//! from any number of threads.

pub mod domain;
pub mod error;
pub mod grammar;
pub mod parser;

pub use domain::{
    is_base58_byte, is_valid_address, Action, Address, AddressFamily, Amount, Chain, Command,
    CommandMode, Unit,
};
pub use error::{ParseErrorKind, ParseFailure, ValidationError};
pub use grammar::{match_line, LineForm, TransactionalFields};
pub use parser::{parse, DEMO_LINES};
