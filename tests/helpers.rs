// Shared test helpers: a scripted resolver and mock-server configuration.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use wiremock::MockServer;

use lancache_diagnostics::dns::{HostResolver, Resolver};
use lancache_diagnostics::error_handling::ResolutionError;
use lancache_diagnostics::probe::HeartbeatProber;
use lancache_diagnostics::{Config, LookupEngine};

/// Answers every hostname with `default`, except those listed in `overrides`.
pub struct ScriptedResolver {
    pub default: Vec<IpAddr>,
    pub overrides: HashMap<String, Answer>,
}

#[allow(dead_code)] // Not every test file uses every answer
pub enum Answer {
    Addresses(Vec<IpAddr>),
    Timeout,
    QueryError,
}

impl ScriptedResolver {
    pub fn loopback() -> Self {
        Self {
            default: vec![IpAddr::from([127, 0, 0, 1])],
            overrides: HashMap::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with(mut self, hostname: &str, answer: Answer) -> Self {
        self.overrides.insert(hostname.to_string(), answer);
        self
    }
}

#[async_trait]
impl HostResolver for ScriptedResolver {
    async fn resolve(
        &self,
        hostname: &str,
        _resolver: &Resolver,
    ) -> Result<Vec<IpAddr>, ResolutionError> {
        match self.overrides.get(hostname) {
            None => Ok(self.default.clone()),
            Some(Answer::Addresses(addresses)) => Ok(addresses.clone()),
            Some(Answer::Timeout) => Err(ResolutionError::Timeout {
                hostname: hostname.to_string(),
            }),
            Some(Answer::QueryError) => Err(ResolutionError::Query {
                hostname: hostname.to_string(),
                message: "SERVFAIL".to_string(),
            }),
        }
    }
}

#[allow(dead_code)] // Not every test file drives whole runs
/// Configuration whose heartbeat port and catalog point at `server`.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        catalog_base_url: server.uri(),
        heartbeat_port: server.address().port(),
        probe_timeout: Duration::from_secs(2),
        simple_target: "steamcontent.test".to_string(),
        simple_iterations: 3,
        ..Default::default()
    }
}

/// Engine over `resolver` that probes `server`.
pub fn engine_for(server: &MockServer, resolver: ScriptedResolver) -> LookupEngine<ScriptedResolver> {
    LookupEngine::new(
        resolver,
        HeartbeatProber::from_config(&config_for(server)),
    )
}
