use clap::{ArgAction, Parser};
use clap::builder::FalseyValueParser;
use std::path::PathBuf;
use std::time::Duration;

use super::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "jrpc",
    version,
    about = "A CLI tool for JSON-RPC 2.0: sends the calls described in a YAML file and prints the raw response."
)]
pub struct JrpcArgs {
    /// Request file (.yml or .yaml) with url, header and body
    #[arg(value_name = "REQUEST_FILE")]
    pub request_file: PathBuf,

    /// Config file (default is $HOME/.jrpc.toml, .yaml, .yml or .json)
    #[arg(long = "config", env = "JRPC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Total request timeout (supports ms/s/m/h, bare numbers are seconds); waits forever when unset
    #[arg(long = "timeout", env = "JRPC_TIMEOUT", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Connect timeout (supports ms/s/m/h, bare numbers are seconds)
    #[arg(
        long = "connect-timeout",
        env = "JRPC_CONNECT_TIMEOUT",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Option<Duration>,

    /// Enable debug logging
    #[arg(
        long = "verbose",
        short = 'v',
        env = "JRPC_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,
}
