//! Hostname list loading.
//!
//! CDN hostname lists are plain text, one entry per line. Comment lines start
//! with `#`; wildcard entries (`*.example.com`) are turned into a concrete
//! probe name under the `lancachetest.` label so they can be resolved.

use log::{debug, warn};

use crate::config::{Cdn, COMMENT_PREFIX, TEST_PREFIX, WILDCARD_PREFIX};
use crate::error_handling::FetchError;

/// Normalizes one list line, or returns `None` when it holds no hostname.
pub fn normalize_entry(line: &str) -> Option<String> {
    let entry = line.trim();
    if entry.is_empty() || entry.starts_with(COMMENT_PREFIX) {
        return None;
    }
    if entry.starts_with(WILDCARD_PREFIX) {
        return Some(entry.replacen(WILDCARD_PREFIX, TEST_PREFIX, 1));
    }
    Some(entry.to_string())
}

/// Parses a hostname list body. Order and duplicates are preserved.
pub fn parse_hostname_list(text: &str) -> Vec<String> {
    text.lines().filter_map(normalize_entry).collect()
}

/// Downloads the list at `url` and returns its hostnames.
///
/// # Errors
///
/// Returns a `FetchError` when the request fails, the server answers with a
/// non-success status, or the body cannot be read or is not valid UTF-8.
pub async fn fetch_hostname_list(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<String>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    let body = String::from_utf8(bytes.to_vec()).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })?;

    let hostnames = parse_hostname_list(&body);
    debug!("{url}: {} hostname(s)", hostnames.len());
    Ok(hostnames)
}

/// Loads the hostname list of `cdn` from the catalog at `base_url`.
///
/// A list that cannot be fetched is logged and treated as empty, so one
/// unreachable list never aborts a multi-CDN run.
pub async fn load_cdn_hostnames(client: &reqwest::Client, cdn: &Cdn, base_url: &str) -> Vec<String> {
    let url = cdn.list_url(base_url);
    match fetch_hostname_list(client, &url).await {
        Ok(hostnames) => hostnames,
        Err(e) => {
            warn!("Could not load hostnames for {}: {e}", cdn.name);
            Vec::new()
        }
    }
}
