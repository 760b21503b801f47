//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::apply_config;
pub use loader::{ConfigLookup, load_config};

pub(crate) use loader::load_config_file;
#[cfg(test)]
pub(crate) use loader::discover_config;
