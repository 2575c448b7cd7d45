use tradedown_core::{parse, DEMO_LINES};

use crate::envelope::LineReport;
use crate::error::CliError;

use super::CommandResult;

pub fn run() -> Result<CommandResult, CliError> {
    let reports = DEMO_LINES
        .iter()
        .enumerate()
        .map(|(index, line)| LineReport::new(index + 1, *line, parse(line)))
        .collect::<Vec<_>>();

    CommandResult::from_reports(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines_cover_every_action() {
        let result = run().expect("runs");
        assert!(result.errors.is_empty());
        assert_eq!(result.parsed, DEMO_LINES.len());

        let actions = result
            .data
            .as_array()
            .expect("array of reports")
            .iter()
            .map(|report| report["command"]["action"].as_str().unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(actions, ["buy", "sell", "query", "buy", "query"]);
    }
}
