//! `devicedata` - enrich a tracking payload with device attributes.
//!
//! Usage: `devicedata [--config <path>] [<payload-json> | -]`
//!
//! Reads the payload from the argument, or from stdin when it is `-` or
//! absent, and prints the enriched payload as JSON on stdout.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use devicedata_lib::{parse_payload, AppContext};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config_path: Option<PathBuf>,
    payload: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Enrich(Args),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("devicedata: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Enrich(args) => args,
    };

    // .env is optional
    let dotenv = dotenvy::dotenv().ok();

    let config = match args.config_path {
        Some(path) => devicedata_infra::config::load_from_file(Some(path))
            .and_then(devicedata_infra::config::apply_env_overrides),
        None => devicedata_infra::config::load(),
    }
    .context("failed to load configuration")?;

    devicedata_infra::init_logging(&config.logging);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let input = match args.payload.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            buffer
        }
        Some(inline) => inline.to_string(),
    };
    let payload = parse_payload(&input).context("invalid tracking payload")?;

    let context = AppContext::new(config);
    let enriched = context.enrich(payload);

    let rendered = serde_json::to_string_pretty(&enriched).context("failed to render payload")?;
    println!("{rendered}");
    Ok(())
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut args = Args::default();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = raw.next().context("--config requires a path")?;
                args.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ if args.payload.is_none() => args.payload = Some(arg),
            unexpected => bail!("unexpected argument: {unexpected}"),
        }
    }

    Ok(Command::Enrich(args))
}

fn print_help() {
    println!("Enrich a tracking payload with device attributes");
    println!();
    println!("USAGE:");
    println!("    devicedata [--config <path>] [<payload-json> | -]");
    println!();
    println!("The payload must be a JSON object; it is read from stdin when omitted.");
    println!("Configuration is read from devicedata.{{json,toml}} / config.{{json,toml}}");
    println!("and overridden by DEVICEDATA_* environment variables.");
}
