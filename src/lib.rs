//! Core library for the `jrpc` CLI.
//!
//! The binary runs one linear pipeline per invocation: load a YAML request
//! file into a [`model::RequestDescriptor`], serialize its calls as a
//! JSON-RPC batch, POST it once over HTTP, and print the raw response body.
//! The modules below are those stages plus the CLI and config layers.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod report;
pub mod request;
