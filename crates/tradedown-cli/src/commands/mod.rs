mod address;
mod batch;
mod examples;
mod parse;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::envelope::{Envelope, EnvelopeError, LineReport};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub parsed: usize,
}

impl CommandResult {
    pub fn ok(data: Value, parsed: usize) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            parsed,
        }
    }

    /// Collect line reports; every failed line becomes an envelope error.
    pub fn from_reports(reports: &[LineReport]) -> Result<Self, CliError> {
        let errors = reports
            .iter()
            .filter_map(|report| {
                report
                    .error
                    .as_ref()
                    .map(|failure| EnvelopeError::from_failure(failure, report.line))
            })
            .collect::<Vec<_>>();
        let parsed = reports.iter().filter(|report| report.is_ok()).count();
        let data = serde_json::to_value(reports)?;

        Ok(Self::ok(data, parsed).with_errors(errors))
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Parse(args) => parse::run(args)?,
        Command::Batch(args) => batch::run(args)?,
        Command::Examples => examples::run()?,
        Command::Address(args) => address::run(args)?,
    };

    Ok(into_envelope(command_result))
}

fn into_envelope(result: CommandResult) -> Envelope<Value> {
    let CommandResult {
        data,
        warnings,
        errors,
        parsed,
    } = result;

    let mut meta = Metadata::new(parsed, errors.len());
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedown_core::{parse, DEMO_LINES};

    #[test]
    fn from_reports_counts_successes_and_failures() {
        let reports = vec![
            LineReport::new(1, DEMO_LINES[0], parse(DEMO_LINES[0])),
            LineReport::new(2, "garbage", parse("garbage")),
            LineReport::new(3, DEMO_LINES[4], parse(DEMO_LINES[4])),
        ];

        let result = CommandResult::from_reports(&reports).expect("serializes");
        assert_eq!(result.parsed, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, Some(2));

        let envelope = into_envelope(result);
        assert_eq!(envelope.meta.parsed, 2);
        assert_eq!(envelope.meta.failed, 1);
        assert_eq!(envelope.data.as_array().map(Vec::len), Some(3));
    }
}
