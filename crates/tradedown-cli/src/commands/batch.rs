use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::info;
use tradedown_core::parse;

use crate::cli::BatchArgs;
use crate::envelope::LineReport;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &BatchArgs) -> Result<CommandResult, CliError> {
    match &args.file {
        Some(path) => {
            let file = File::open(path)?;
            parse_lines(BufReader::new(file))
        }
        None => parse_lines(io::stdin().lock()),
    }
}

/// Parse every non-blank, non-comment line. Line numbers refer to the source.
///
/// Bytes that are not UTF-8 are replaced, so such a line fails the grammar
/// on its own instead of ending the batch.
pub fn parse_lines<R: BufRead>(mut reader: R) -> Result<CommandResult, CliError> {
    let mut reports = Vec::new();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        reports.push(LineReport::new(number, trimmed, parse(trimmed)));
    }

    let result = CommandResult::from_reports(&reports)?;
    info!(
        lines = reports.len(),
        parsed = result.parsed,
        failed = result.errors.len(),
        "batch parsed"
    );

    if reports.is_empty() {
        return Ok(result.with_warning("no tradedown lines found in input"));
    }
    Ok(result)
}
