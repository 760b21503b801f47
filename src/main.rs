mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod model;
mod report;
mod request;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
