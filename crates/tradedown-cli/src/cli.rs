//! CLI argument definitions for tradedown.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `parse` | Parse one or more lines given as arguments |
//! | `batch` | Parse every line of a file or stdin |
//! | `examples` | Parse the built-in demo lines |
//! | `address` | Classify a single address |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and failed lines as errors |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//!
//! # Examples
//!
//! ```bash
//! tradedown parse "0x098054c0c6ba84d95E2011946Db9a15BfFDB4444+0.5bnb"
//! tradedown --format table parse "9wFFo5AF2Zr1y9fQzSBkJtN49KBTzVZzraNmu6uUah8d + 3 sol"
//! tradedown batch --file orders.txt --strict
//! cat orders.txt | tradedown --format ndjson batch
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Parse tradedown lines into structured buy, sell and query commands.
#[derive(Debug, Parser)]
#[command(
    name = "tradedown",
    author,
    version,
    about = "Parse tradedown trading commands",
    long_about = "tradedown turns one-line trading intents into structured commands.\n\
\n\
  ADDRESS + VALUE[%] [UNIT]   buy\n\
  ADDRESS - VALUE[%] [UNIT]   sell\n\
  ADDRESS                     query\n\
\n\
Addresses are EVM-style (0x + 40 hex, chain bsc) or Base58 (32-44 chars, chain sol).\n\
Nothing is executed; results are printed for downstream tools."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and failed lines as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log filter used when RUST_LOG is not set (e.g. warn, debug, tradedown_core=trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Table,
    /// Single JSON object output.
    Json,
    /// One JSON object per parsed line, then a summary object.
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse each argument as one tradedown line.
    ///
    ///   tradedown parse "0xABC...+0.5bnb" "0xABC...-100%"
    Parse(ParseArgs),

    /// Parse lines from a file, or stdin when no file is given.
    ///
    /// Blank lines and lines starting with '#' are skipped.
    Batch(BatchArgs),

    /// Parse the built-in demo lines.
    Examples,

    /// Report the family and chain of a single address.
    Address(AddressArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Lines to parse.
    #[arg(required = true, num_args = 1..)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Read lines from this file instead of stdin.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct AddressArgs {
    /// EVM or Base58 address.
    pub address: String,
}
