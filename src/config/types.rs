//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the immutable configuration injected into the diagnostics engine.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CACHE_DOMAINS_BASE_URL, CATALOG_FETCH_TIMEOUT, CDN_ITERATIONS, DEFAULT_OUTPUT_FILE,
    DNS_PORT, DNS_TIMEOUT, HTTP_PORT, PROBE_TIMEOUT, SIMPLE_ITERATIONS, SIMPLE_TARGET_HOST,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Diagnostics mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Probe the Steam test host through the system resolver only
    Simple,
    /// Simple diagnostics, then every catalog CDN through every resolver
    Full,
    /// A chosen subset of catalog CDNs through every resolver
    Custom,
}

impl Mode {
    /// Menu label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Simple => "Diagnostics - Simple",
            Mode::Full => "Diagnostics - Full",
            Mode::Custom => "Diagnostics - Custom",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Holds every fixed detail the engine needs. `Default` yields the production
/// values; tests point the catalog and the heartbeat port at local mock servers.
///
/// # Examples
///
/// ```no_run
/// use lancache_diagnostics::Config;
///
/// let config = Config {
///     simple_iterations: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL hostname list files are resolved against
    pub catalog_base_url: String,

    /// Port the heartbeat probe dials on the resolved address
    pub heartbeat_port: u16,

    /// Port explicit resolvers are queried on when their identifier has none
    pub dns_port: u16,

    /// Bound on one resolution (both record queries)
    pub dns_timeout: Duration,

    /// Bound on one heartbeat request
    pub probe_timeout: Duration,

    /// Bound on downloading one hostname list
    pub catalog_fetch_timeout: Duration,

    /// Host probed by simple diagnostics
    pub simple_target: String,

    /// Iterations run by simple diagnostics
    pub simple_iterations: usize,

    /// Iterations run per CDN by full and custom diagnostics
    pub cdn_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: CACHE_DOMAINS_BASE_URL.to_string(),
            heartbeat_port: HTTP_PORT,
            dns_port: DNS_PORT,
            dns_timeout: DNS_TIMEOUT,
            probe_timeout: PROBE_TIMEOUT,
            catalog_fetch_timeout: CATALOG_FETCH_TIMEOUT,
            simple_target: SIMPLE_TARGET_HOST.to_string(),
            simple_iterations: SIMPLE_ITERATIONS,
            cdn_iterations: CDN_ITERATIONS,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Interactive menu
/// lancache-diagnostics
///
/// # Non-interactive full run against an extra resolver
/// lancache-diagnostics --mode full --resolver 10.0.0.53
///
/// # Selected CDNs only
/// lancache-diagnostics --mode custom --cdn Steam --cdn "Epic Games"
/// ```
///
/// With `--mode`, the process exits with status 2 unless every report found a
/// consistent cache.
#[derive(Debug, Parser)]
#[command(
    name = "lancache-diagnostics",
    about = "Checks whether lancache instances intercept CDN traffic consistently."
)]
pub struct Opt {
    /// Diagnostics mode; omit to pick interactively
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// CDN name to probe in custom mode (repeatable)
    #[arg(long = "cdn")]
    pub cdns: Vec<String>,

    /// Extra resolver to probe through: IP or IP:PORT (repeatable)
    #[arg(long = "resolver")]
    pub resolvers: Vec<String>,

    /// Override the number of iterations per run
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Override the host probed by simple diagnostics
    #[arg(long)]
    pub host: Option<String>,

    /// File the report is mirrored to
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Only print the report, do not write the output file
    #[arg(long)]
    pub no_output_file: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the library configuration, applying CLI overrides.
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(host) = &self.host {
            config.simple_target = host.clone();
        }
        if let Some(iterations) = self.iterations {
            config.simple_iterations = iterations;
            config.cdn_iterations = iterations;
        }
        config
    }

    /// Output file path, or `None` when file output is disabled.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.no_output_file {
            None
        } else {
            Some(self.output.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.heartbeat_port, 80);
        assert_eq!(config.dns_port, 53);
        assert_eq!(config.dns_timeout, Duration::from_secs(1));
        assert_eq!(config.probe_timeout, Duration::from_secs(1));
        assert_eq!(config.simple_target, "lancache.steamcontent.com");
        assert_eq!(config.simple_iterations, 6);
        assert_eq!(config.cdn_iterations, 1);
        assert!(config.catalog_base_url.ends_with("/cache-domains/master/"));
    }

    #[test]
    fn test_opt_overrides_apply_to_config() {
        let opt = Opt::try_parse_from([
            "lancache-diagnostics",
            "--iterations",
            "3",
            "--host",
            "steamcontent.test",
        ])
        .unwrap();
        let config = opt.to_config();
        assert_eq!(config.simple_iterations, 3);
        assert_eq!(config.cdn_iterations, 3);
        assert_eq!(config.simple_target, "steamcontent.test");
    }

    #[test]
    fn test_opt_output_path() {
        let opt = Opt::try_parse_from(["lancache-diagnostics"]).unwrap();
        assert_eq!(opt.output_path(), Some(PathBuf::from("diagnostics.txt")));

        let opt = Opt::try_parse_from(["lancache-diagnostics", "--no-output-file"]).unwrap();
        assert_eq!(opt.output_path(), None);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Simple.label(), "Diagnostics - Simple");
        assert_eq!(Mode::Full.label(), "Diagnostics - Full");
        assert_eq!(Mode::Custom.label(), "Diagnostics - Custom");
    }
}
