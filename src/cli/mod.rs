//! Command-line interface for the sidecar
//!
//! Provides the `run` subcommand. Options are resolved from flags, then the
//! environment snapshot, then static defaults.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::IsTerminal;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{ConfigError, EnvSnapshot, Options};

mod run;

pub use run::RunArgs;

const BIN_NAME: &str = "sidecar";

/// Sidecar utility
#[derive(Parser, Debug)]
#[command(name = "sidecar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_override_self = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the sidecar utility
    #[command(args_override_self = true)]
    Run(RunArgs),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Invalid(#[from] ConfigError),

    #[error(transparent)]
    Args(#[from] clap::Error),
}

/// Resolve [`Options`] from command tokens (without the program name) and an
/// environment snapshot. Never touches the process environment.
pub fn parse_args<I, T>(args: I, envs: &EnvSnapshot) -> Result<Options, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(argv)?;

    match cli.command {
        Commands::Run(args) => Ok(args.resolve(envs)?),
    }
}

pub fn run() -> Result<()> {
    let envs = EnvSnapshot::from_process();
    init_tracing(&envs);

    let options = match parse_args(std::env::args_os().skip(1), &envs) {
        Ok(options) => options,
        // --help and --version land here as errors; let clap print them.
        Err(ParseError::Args(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            tracing::error!("Error parsing arguments: {err}");
            std::process::exit(1);
        }
    };

    println!("Options: {}", serde_json::to_string(&options)?);
    tracing::info!(
        chain = %options.chain,
        grpc_port = options.rpc_grpc_port,
        http_port = options.rpc_http_port,
        in_memory = options.sqlite_in_memory,
        "configuration resolved"
    );

    Ok(())
}

// RUST_LOG from the snapshot takes precedence; otherwise INFO.
fn init_tracing(envs: &EnvSnapshot) {
    let filter = envs
        .get(EnvFilter::DEFAULT_ENV)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let stderr_is_terminal = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(stderr_is_terminal))
        .with(filter)
        .try_init();
}
