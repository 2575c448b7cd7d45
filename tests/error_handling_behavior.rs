//! Behavior-driven tests for rejected lines
//!
//! Each failing line yields exactly one classified error, chosen by the
//! first rule that applies: format, then address, then value.

use tradedown_tests::{parse, ParseErrorKind, ParseFailure, EVM_ADDRESS, SOL_ADDRESS};

// =============================================================================
// Format Errors
// =============================================================================

#[test]
fn when_line_has_trailing_garbage_user_gets_format_error() {
    // Given: A valid buy with characters after the unit
    for suffix in ["+0.5bnb!", "+0.5bnb 7", "+0.5 bnb now", "+0.5bnb2"] {
        let line = format!("{EVM_ADDRESS}{suffix}");

        // When: It is parsed
        let failure = parse(&line).expect_err("should be rejected");

        // Then: It is a format error, not an address or value error
        assert_eq!(failure.kind(), ParseErrorKind::InvalidFormat, "{suffix}");
        assert_eq!(failure.code(), "INVALID_FORMAT");
    }
}

#[test]
fn when_number_is_not_plain_decimal_user_gets_format_error() {
    for value in ["-5", "1e3", "1,000", ".5", "5.", "0x10", "½"] {
        let line = format!("{SOL_ADDRESS}+{value}");
        let failure = parse(&line).expect_err("should be rejected");
        assert_eq!(failure.kind(), ParseErrorKind::InvalidFormat, "{value}");
    }
}

#[test]
fn when_line_is_empty_or_prose_user_gets_format_error() {
    for line in ["", "   ", "buy some bnb please", "+0.5bnb"] {
        let failure = parse(line).expect_err("should be rejected");
        assert_eq!(failure.kind(), ParseErrorKind::InvalidFormat, "{line:?}");
        assert!(failure.message().contains("does not match tradedown syntax"));
    }
}

// =============================================================================
// Address Errors
// =============================================================================

#[test]
fn when_evm_address_is_one_char_short_user_gets_address_error() {
    // Given: 39 hex characters after 0x, with a valid buy suffix
    let short = &EVM_ADDRESS[..EVM_ADDRESS.len() - 1];
    let line = format!("{short}+0.5bnb");

    // When: It is parsed
    let failure = parse(&line).expect_err("should be rejected");

    // Then: The address is blamed and echoed back
    assert_eq!(
        failure,
        ParseFailure::InvalidAddress {
            address: short.to_owned()
        }
    );
    assert!(failure.message().contains(short));
}

#[test]
fn when_address_uses_excluded_base58_characters_query_is_rejected() {
    // Given: A 44-char token that is alphanumeric but contains 'l'
    let lookalike = format!("{}l", &SOL_ADDRESS[..43]);

    // When: It is parsed as a query
    let failure = parse(&lookalike).expect_err("should be rejected");

    // Then: The query path applies the same strict gate as buy/sell
    assert_eq!(failure.kind(), ParseErrorKind::InvalidAddress);
    assert_eq!(failure.code(), "INVALID_ADDRESS");
}

// =============================================================================
// Value Errors
// =============================================================================

#[test]
fn when_value_overflows_user_gets_value_error_with_text() {
    // Given: A number too large to represent
    let huge = format!("1{}", "0".repeat(400));
    let line = format!("{EVM_ADDRESS}-{huge}%");

    // When: It is parsed
    let failure = parse(&line).expect_err("should be rejected");

    // Then: A value error echoes the offending text
    assert_eq!(failure.kind(), ParseErrorKind::InvalidValue);
    assert_eq!(failure.code(), "INVALID_VALUE");
    assert!(failure.message().contains(&huge));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn failures_serialize_with_stable_code_and_message() {
    let failure = parse("nonsense").expect_err("should be rejected");
    let json = serde_json::to_value(&failure).expect("serializes");

    assert_eq!(json["code"], "INVALID_FORMAT");
    assert!(json["message"]
        .as_str()
        .is_some_and(|message| message.contains("nonsense")));
    assert_eq!(json.as_object().map(|object| object.len()), Some(2));
}
