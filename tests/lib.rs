// Shared fixtures for tradedown behavior tests
pub use tradedown_core::{
    parse, Action, Address, AddressFamily, Chain, Command, ParseErrorKind, ParseFailure, DEMO_LINES,
};

pub const EVM_ADDRESS: &str = "0x098054c0c6ba84d95E2011946Db9a15BfFDB4444";
pub const EVM_QUERY_ADDRESS: &str = "0xAabbccddeeff00112233445566778899AabbCCDD";
pub const SOL_ADDRESS: &str = "9wFFo5AF2Zr1y9fQzSBkJtN49KBTzVZzraNmu6uUah8d";
pub const SOL_QUERY_ADDRESS: &str = "3n65MaYLVdu8Dfi63Zrm25KCNt4WyLPVWwNT5Ch9S93W";

/// Non-negative decimals written the way a user would type them.
pub const SAMPLE_VALUES: [(&str, f64); 6] = [
    ("0", 0.0),
    ("1", 1.0),
    ("0.5", 0.5),
    ("42", 42.0),
    ("1000000", 1_000_000.0),
    ("0.000001", 0.000001),
];
