//! # Domain Models
//!
//! Validated value types that make up a parsed tradedown command.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Address`] | Address that passed the strict EVM or Base58 shape check |
//! | [`AddressFamily`] | Lexical family of an address (`evm`, `base58`) |
//! | [`Chain`] | Network inferred from address shape (`bsc`, `sol`, `unknown`) |
//! | [`Action`] | `buy`, `sell` or `query` |
//! | [`Unit`] | Lower-cased alphabetic unit token |
//! | [`Amount`] | Value, percent flag and unit of a buy/sell |
//! | [`Command`] | Complete parse result |
//!
//! Construction validates every invariant, so a [`Command`] in hand is
//! always well-formed.

mod action;
mod address;
mod amount;
mod chain;
mod command;

pub use action::Action;
pub use address::{is_base58_byte, is_valid_address, Address, AddressFamily};
pub use amount::{Amount, Unit};
pub use chain::Chain;
pub use command::{Command, CommandMode};
