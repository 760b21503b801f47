//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;


pub use cli::JrpcArgs;

pub(crate) use defaults::default_config_paths;
