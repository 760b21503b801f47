use std::path::{Path, PathBuf};

use crate::args::default_config_paths;
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Outcome of looking for a config file.
#[derive(Debug)]
pub enum ConfigLookup {
    Loaded { path: PathBuf, config: ConfigFile },
    /// A discovered file that could not be used; the run goes on without it.
    Ignored { path: PathBuf, error: ConfigError },
    NotFound,
}

/// Loads the config file given by path, or the first one found in the home
/// directory.
///
/// # Errors
///
/// Returns an error when an explicitly given config file cannot be read or
/// parsed. Problems with a discovered file are reported as
/// [`ConfigLookup::Ignored`] instead.
pub fn load_config(path: Option<&Path>) -> Result<ConfigLookup, ConfigError> {
    if let Some(path) = path {
        let config = load_config_file(path)?;
        return Ok(ConfigLookup::Loaded {
            path: path.to_path_buf(),
            config,
        });
    }

    Ok(discover_config(&default_config_paths()))
}

pub(crate) fn discover_config(candidates: &[PathBuf]) -> ConfigLookup {
    let Some(path) = candidates.iter().find(|candidate| candidate.exists()) else {
        return ConfigLookup::NotFound;
    };
    match load_config_file(path) {
        Ok(config) => ConfigLookup::Loaded {
            path: path.clone(),
            config,
        },
        Err(error) => ConfigLookup::Ignored {
            path: path.clone(),
            error,
        },
    }
}

pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        }),
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|err| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source: err,
            })
        }
        Some(ext) => Err(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        }),
        None => Err(ConfigError::MissingExtension),
    }
}
