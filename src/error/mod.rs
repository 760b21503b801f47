mod app;
mod config;
mod format;
mod remote;
mod transport;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use format::{FormatError, SerializationError};
pub use remote::RemoteError;
pub use transport::TransportError;
