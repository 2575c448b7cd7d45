use tradedown_core::parse;

use crate::cli::ParseArgs;
use crate::envelope::LineReport;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ParseArgs) -> Result<CommandResult, CliError> {
    let reports = args
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| LineReport::new(index + 1, line.as_str(), parse(line)))
        .collect::<Vec<_>>();

    CommandResult::from_reports(&reports)
}
