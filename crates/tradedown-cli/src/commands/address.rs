use serde::Serialize;
use tracing::debug;
use tradedown_core::{Address, AddressFamily, Chain};

use crate::cli::AddressArgs;
use crate::envelope::EnvelopeError;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AddressReport<'a> {
    address: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<AddressFamily>,
    chain: Chain,
}

pub fn run(args: &AddressArgs) -> Result<CommandResult, CliError> {
    let address = args.address.trim();
    let family = AddressFamily::classify(address);
    let report = AddressReport {
        address,
        valid: family.is_some(),
        family,
        chain: Chain::detect(address),
    };
    debug!(address, valid = report.valid, chain = %report.chain, "classified address");

    let data = serde_json::to_value(&report)?;
    match Address::parse(address) {
        Ok(_) => Ok(CommandResult::ok(data, 1)),
        Err(error) => Ok(CommandResult::ok(data, 0)
            .with_errors(vec![EnvelopeError::new("INVALID_ADDRESS", error.to_string())])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(address: &str) -> CommandResult {
        run(&AddressArgs {
            address: address.to_owned(),
        })
        .expect("runs")
    }

    #[test]
    fn reports_family_and_chain() {
        let result = run_for("3n65MaYLVdu8Dfi63Zrm25KCNt4WyLPVWwNT5Ch9S93W");
        assert!(result.errors.is_empty());
        assert_eq!(result.data["valid"], true);
        assert_eq!(result.data["family"], "base58");
        assert_eq!(result.data["chain"], "sol");
    }

    #[test]
    fn invalid_address_is_unknown_with_error() {
        let result = run_for("0x1234");
        assert_eq!(result.data["valid"], false);
        assert_eq!(result.data["chain"], "unknown");
        assert!(result.data.get("family").is_none());
        assert_eq!(result.errors[0].code, "INVALID_ADDRESS");
    }
}
