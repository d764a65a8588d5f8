//! lancache_diagnostics library: lancache presence and consistency checks
//!
//! This library resolves game CDN hostnames through one or more DNS resolvers,
//! probes each resolved address for the lancache heartbeat, and reports whether
//! every resolver, iteration and hostname reached the same cache instance.
//!
//! # Example
//!
//! ```no_run
//! use lancache_diagnostics::report::OutputSink;
//! use lancache_diagnostics::{run_diagnostics, Config, DiagnosticsRequest, Mode, ResolverSet};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let request = DiagnosticsRequest {
//!     mode: Mode::Simple,
//!     cdns: Vec::new(),
//!     resolvers: ResolverSet::system_only(),
//! };
//!
//! let mut sink = OutputSink::stdout();
//! let summary = run_diagnostics(&config, &request, &mut sink).await?;
//! println!("{} consistent, {} inconsistent", summary.consistent, summary.inconsistent);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod lookup;
pub mod probe;
pub mod report;

// Re-export public API
pub use config::{Cdn, Config, LogFormat, LogLevel, Mode, CDNS};
pub use dns::{Resolver, ResolverSet};
pub use lookup::{LookupAttempt, LookupEngine, LookupScope, ResolverReport, ResolverVerdict};
pub use report::DiagnosticsSummary;
pub use run::{run_diagnostics, run_diagnostics_with, DiagnosticsRequest};

// Internal run module (contains the mode logic)
mod run {
    use log::info;

    use crate::config::{Cdn, Config, Mode, CDNS};
    use crate::dns::{HostResolver, ResolverSet};
    use crate::error_handling::InitializationError;
    use crate::fetch::load_cdn_hostnames;
    use crate::initialization::init_catalog_client;
    use crate::lookup::{LookupEngine, LookupScope, ResolverReport, ResolverVerdict};
    use crate::report::{
        cdn_header, render_listing, render_report, target_header, DiagnosticsSummary, OutputSink,
    };

    /// What to run.
    #[derive(Debug, Clone)]
    pub struct DiagnosticsRequest {
        pub mode: Mode,
        /// CDNs probed in custom mode; ignored by the other modes
        pub cdns: Vec<Cdn>,
        /// Resolvers the CDN hostnames are checked through
        pub resolvers: ResolverSet,
    }

    /// Runs one diagnostics request against real DNS and writes the report to `sink`.
    ///
    /// - `Simple`: the target host through the system resolver only
    /// - `Full`: `Simple`, then every catalog CDN through every resolver, with
    ///   per-attempt listings written to the output file
    /// - `Custom`: the requested CDNs through every resolver
    ///
    /// Per-attempt failures never abort the run; they are reported.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the catalog client
    /// cannot be built.
    pub async fn run_diagnostics(
        config: &Config,
        request: &DiagnosticsRequest,
        sink: &mut OutputSink,
    ) -> Result<DiagnosticsSummary, InitializationError> {
        let engine = LookupEngine::from_config(config);
        run_diagnostics_with(&engine, config, request, sink).await
    }

    /// `run_diagnostics` with a caller-provided engine.
    pub async fn run_diagnostics_with<R: HostResolver>(
        engine: &LookupEngine<R>,
        config: &Config,
        request: &DiagnosticsRequest,
        sink: &mut OutputSink,
    ) -> Result<DiagnosticsSummary, InitializationError> {
        let client = init_catalog_client(config)?;
        let mut summary = DiagnosticsSummary::default();
        info!("Starting {}", request.mode.label());

        match request.mode {
            Mode::Simple => run_simple(engine, config, sink, &mut summary).await,
            Mode::Full => {
                run_simple(engine, config, sink, &mut summary).await;
                for cdn in CDNS {
                    let reports =
                        run_cdn(engine, &client, config, cdn, &request.resolvers, sink).await;
                    emit(&reports, true, sink, &mut summary);
                }
            }
            Mode::Custom => {
                for cdn in &request.cdns {
                    let reports =
                        run_cdn(engine, &client, config, cdn, &request.resolvers, sink).await;
                    emit(&reports, false, sink, &mut summary);
                }
            }
        }

        sink.flush();
        Ok(summary)
    }

    async fn run_simple<R: HostResolver>(
        engine: &LookupEngine<R>,
        config: &Config,
        sink: &mut OutputSink,
        summary: &mut DiagnosticsSummary,
    ) {
        sink.write(&target_header(&config.simple_target));
        let scope = LookupScope::Host(config.simple_target.clone());
        let reports = engine
            .run(&scope, config.simple_iterations, &ResolverSet::system_only())
            .await;
        emit(&reports, false, sink, summary);
    }

    async fn run_cdn<R: HostResolver>(
        engine: &LookupEngine<R>,
        client: &reqwest::Client,
        config: &Config,
        cdn: &Cdn,
        resolvers: &ResolverSet,
        sink: &mut OutputSink,
    ) -> Vec<ResolverReport> {
        let hostnames = load_cdn_hostnames(client, cdn, &config.catalog_base_url).await;
        sink.write(&cdn_header(cdn.name));
        let scope = LookupScope::Hostnames(hostnames);
        engine.run(&scope, config.cdn_iterations, resolvers).await
    }

    /// Writes `reports` and folds them into `summary`. With `details`, reports
    /// that do not already list their attempts get the listing in the file.
    fn emit(
        reports: &[ResolverReport],
        details: bool,
        sink: &mut OutputSink,
        summary: &mut DiagnosticsSummary,
    ) {
        for report in reports {
            sink.write(&render_report(report));
            if details && !matches!(report.verdict, ResolverVerdict::Inconsistent { .. }) {
                sink.detail(&render_listing(report));
            }
            summary.record(report);
        }
    }
}
