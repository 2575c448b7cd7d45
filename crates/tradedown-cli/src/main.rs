mod cli;
mod commands;
mod envelope;
mod error;
mod logging;
mod metadata;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::envelope::Envelope;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let envelope = commands::run(&cli)?;
    output::render(&mut io::stdout().lock(), &envelope, cli.format, cli.pretty)?;

    exit_status(&envelope, cli.strict).map(ExitCode::from)
}

/// 0 when every line parsed, 3 when some failed. Under `--strict` any
/// warning or failure is a [`CliError::StrictModeViolation`].
fn exit_status<T>(envelope: &Envelope<T>, strict: bool) -> Result<u8, CliError> {
    let warning_count = envelope.meta.warnings.len();
    let error_count = envelope.errors.len();

    if strict && (warning_count > 0 || error_count > 0) {
        return Err(CliError::StrictModeViolation {
            warning_count,
            error_count,
        });
    }

    if error_count > 0 {
        return Ok(3);
    }
    Ok(0)
}
