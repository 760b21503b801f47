use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_arg;

/// Settings read from a config file. Every field is optional and loses to
/// the same option given on the command line or through the environment.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, String> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err("Duration must be > 0.".to_owned())
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
