//! Request file loading and JSON-RPC payload construction.
mod loader;
mod payload;


pub use loader::{is_request_file, load_request_file};
pub use payload::build_payload;
