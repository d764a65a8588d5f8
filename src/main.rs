//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `lancache_diagnostics` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Resolver discovery
//! - Choosing between a single non-interactive run and the interactive menu
//!
//! All core functionality is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process;

use lancache_diagnostics::app::{interactive_loop, run_request};
use lancache_diagnostics::config::Opt;
use lancache_diagnostics::initialization::{init_logger_with, init_resolver_set};
use lancache_diagnostics::{Cdn, DiagnosticsRequest, Mode, Resolver};

/// Resolves `--cdn` names against the catalog.
fn requested_cdns(names: &[String]) -> Result<Vec<Cdn>> {
    names
        .iter()
        .map(|name| {
            Cdn::find(name)
                .copied()
                .with_context(|| format!("Unknown CDN: {name}"))
        })
        .collect()
}

/// Exit status of a non-interactive run whose reports are not all consistent.
const EXIT_NOT_CONSISTENT: i32 = 2;

/// Returns whether every report came back consistent. Interactive sessions
/// always count as consistent.
async fn run(opt: Opt) -> Result<bool> {
    let config = opt.to_config();

    let extra = opt
        .resolvers
        .iter()
        .map(|s| Resolver::parse_with_port(s, config.dns_port))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid --resolver")?;
    let (resolvers, nameservers) = init_resolver_set(extra);
    let output = opt.output_path();

    match opt.mode {
        Some(mode) => {
            let cdns = requested_cdns(&opt.cdns)?;
            if mode == Mode::Custom && cdns.is_empty() {
                bail!("--mode custom needs at least one --cdn");
            }
            let request = DiagnosticsRequest {
                mode,
                cdns,
                resolvers,
            };
            let summary = run_request(&config, &request, output.as_deref(), &nameservers).await?;
            Ok(summary.all_consistent())
        }
        None => {
            interactive_loop(&config, &resolvers, output.as_deref(), &nameservers).await?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(opt).await {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(EXIT_NOT_CONSISTENT),
        Err(e) => {
            eprintln!("lancache-diagnostics error: {:#}", e);
            process::exit(1);
        }
    }
}
