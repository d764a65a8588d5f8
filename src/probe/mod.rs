//! Heartbeat probing.
//!
//! A probe is a single `GET /lancache-heartbeat` pinned to a resolved address.
//! Redirects are never followed and nothing is retried here: iteration is the
//! engine's job. A response carrying a non-empty `X-Lancache-Processed-By`
//! header means a lancache instance answered; anything else is a failure.

use std::net::IpAddr;
use std::time::Duration;

use log::debug;
use reqwest::redirect::Policy;

use crate::config::{Config, HEARTBEAT_PATH, LANCACHE_HEADER};
use crate::dns::{Resolver, TransportBinding};
use crate::error_handling::{categorize_probe_error, ErrorType, ProbeError};
use crate::lookup::LookupAttempt;

/// A probed attempt and, when it failed, why.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub attempt: LookupAttempt,
    pub failure: Option<ErrorType>,
}

/// Issues heartbeat requests.
#[derive(Debug, Clone)]
pub struct HeartbeatProber {
    port: u16,
    timeout: Duration,
}

impl HeartbeatProber {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.heartbeat_port, config.probe_timeout)
    }

    /// Port the transport binding should dial.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Heartbeat URL for `hostname`.
    ///
    /// Literal addresses cannot be pinned through name resolution, so they
    /// carry the heartbeat port in the URL instead.
    pub fn heartbeat_url(&self, hostname: &str) -> String {
        match hostname.parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) => format!("http://{ip}:{}{HEARTBEAT_PATH}", self.port),
            Ok(IpAddr::V6(ip)) => format!("http://[{ip}]:{}{HEARTBEAT_PATH}", self.port),
            Err(_) => format!("http://{hostname}{HEARTBEAT_PATH}"),
        }
    }

    /// Builds a client that dials `binding.target` for `binding.host`.
    fn client(&self, binding: Option<&TransportBinding>) -> Result<reqwest::Client, ProbeError> {
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(self.timeout)
            .no_proxy();
        if let Some(binding) = binding {
            builder = builder.resolve(&binding.host, binding.target);
        }
        builder.build().map_err(ProbeError::Client)
    }

    /// Sends one heartbeat and returns the marker header value, if any.
    pub async fn request(
        &self,
        hostname: &str,
        binding: Option<&TransportBinding>,
    ) -> Result<Option<String>, ProbeError> {
        let client = self.client(binding)?;
        let url = self.heartbeat_url(hostname);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: url.clone(),
                source,
            })?;

        let container_id = response
            .headers()
            .get(LANCACHE_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        debug!(
            "heartbeat {url} via {:?}: HTTP {} container={container_id:?}",
            binding.map(|b| b.target),
            response.status()
        );
        Ok(container_id)
    }

    /// Probes `hostname` and classifies the outcome into a lookup attempt.
    pub async fn probe(
        &self,
        hostname: &str,
        resolver: &Resolver,
        addresses: Vec<IpAddr>,
        binding: Option<&TransportBinding>,
    ) -> ProbeResult {
        match self.request(hostname, binding).await {
            Ok(Some(container_id)) => ProbeResult {
                attempt: LookupAttempt::new(*resolver, hostname, addresses, Some(container_id)),
                failure: None,
            },
            Ok(None) => ProbeResult {
                attempt: LookupAttempt::failed(*resolver, hostname, addresses),
                failure: Some(ErrorType::MissingLancacheHeader),
            },
            Err(e) => {
                debug!("{e}");
                ProbeResult {
                    attempt: LookupAttempt::failed(*resolver, hostname, addresses),
                    failure: Some(categorize_probe_error(&e)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
