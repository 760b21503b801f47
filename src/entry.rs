use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::JrpcArgs;
use crate::config::ConfigLookup;
use crate::error::AppResult;
use crate::http::{RpcClient, TransportOptions, build_header_map};
use crate::report::report;
use crate::request::{build_payload, load_request_file};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    let lookup = apply_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose);
    match lookup {
        ConfigLookup::Loaded { path, .. } => {
            tracing::debug!("Using config file: {}", path.display());
        }
        ConfigLookup::Ignored { path, error } => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), error);
        }
        ConfigLookup::NotFound => {}
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<(JrpcArgs, ArgMatches)> {
    let matches = JrpcArgs::command().get_matches();
    let args = JrpcArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut JrpcArgs, matches: &ArgMatches) -> AppResult<ConfigLookup> {
    let lookup = crate::config::load_config(args.config.as_deref())?;
    if let ConfigLookup::Loaded { config, .. } = &lookup {
        crate::config::apply_config(args, matches, config)?;
    }
    Ok(lookup)
}

async fn run_async(args: &JrpcArgs) -> AppResult<()> {
    let descriptor = load_request_file(&args.request_file)?;
    let payload = build_payload(&descriptor.body)?;
    let headers = build_header_map(descriptor.header.as_ref())?;

    let client = RpcClient::new(TransportOptions {
        timeout: args.timeout,
        connect_timeout: args.connect_timeout,
    })?;
    let response = client.send(&descriptor.url, headers, payload).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(&response, &mut out)
}
