use tracing::debug;

use crate::grammar::{match_line, LineForm, TransactionalFields};
use crate::{Address, Amount, Command, ParseFailure, Unit};

/// Demo lines covering every command shape.
pub const DEMO_LINES: [&str; 5] = [
    "0x098054c0c6ba84d95E2011946Db9a15BfFDB4444+0.5bnb",
    "0x098054c0c6ba84d95E2011946Db9a15BfFDB4444-100%",
    "0xAabbccddeeff00112233445566778899AabbCCDD",
    "9wFFo5AF2Zr1y9fQzSBkJtN49KBTzVZzraNmu6uUah8d+3sol",
    "3n65MaYLVdu8Dfi63Zrm25KCNt4WyLPVWwNT5Ch9S93W",
];

/// Parse one line of tradedown syntax.
///
/// Rules are applied in order: grammar match, strict address check, value
/// conversion, unit normalization. The first failing rule decides the error.
pub fn parse(line: &str) -> Result<Command, ParseFailure> {
    let Some(form) = match_line(line) else {
        debug!(code = "INVALID_FORMAT", "line rejected by grammar");
        return Err(ParseFailure::InvalidFormat {
            input: line.trim().to_owned(),
        });
    };

    let target = Address::parse(form.address()).map_err(|_| {
        debug!(
            code = "INVALID_ADDRESS",
            address = form.address(),
            "strict address check failed"
        );
        ParseFailure::InvalidAddress {
            address: form.address().to_owned(),
        }
    })?;

    let command = match form {
        LineForm::Query { .. } => Command::query(target),
        LineForm::Transactional(fields) => build_trade(line, target, &fields)?,
    };

    debug!(
        action = %command.action(),
        chain = %command.chain(),
        "parsed tradedown line"
    );
    Ok(command)
}

/// Fields the grammar should already have ruled out (a non-letter unit, a
/// query action) fail as `InvalidFormat` carrying the whole line.
fn build_trade(
    line: &str,
    target: Address,
    fields: &TransactionalFields<'_>,
) -> Result<Command, ParseFailure> {
    let invalid_format = || ParseFailure::InvalidFormat {
        input: line.trim().to_owned(),
    };
    let invalid_value = || ParseFailure::InvalidValue {
        value: fields.value.to_owned(),
    };

    let value = Amount::parse_value(fields.value).map_err(|error| {
        debug!(code = "INVALID_VALUE", %error, "value conversion failed");
        invalid_value()
    })?;
    let unit = Unit::normalize(fields.unit, fields.action).map_err(|_| invalid_format())?;
    let amount = Amount::new(value, fields.percent, unit).map_err(|_| invalid_value())?;

    Command::trade(fields.action, target, amount).ok_or_else(invalid_format)
}
