use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::JrpcArgs;
use crate::error::ConfigError;

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments that were not set explicitly.
///
/// # Errors
///
/// Returns an error when a config duration is invalid.
pub fn apply_config(
    args: &mut JrpcArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = Some(to_duration(timeout, "timeout")?);
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(connect_timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(to_duration(connect_timeout, "connect_timeout")?);
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn to_duration(
    value: &DurationValue,
    field: &'static str,
) -> Result<std::time::Duration, ConfigError> {
    value
        .to_duration()
        .map_err(|message| ConfigError::InvalidDuration { field, message })
}
