//! Subscriber setup for the `tradedown` binary.
//!
//! Events go to stderr so stdout stays machine-readable. `RUST_LOG` wins
//! over `--log-level` when it is set.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

pub fn init(default_level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|error| CliError::Logging(error.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
