// src/checker/http.rs
// =============================================================================
// This module checks if external URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Follows redirects automatically and judges the final response
// - Detects failure modes (404, timeout, DNS, TLS, etc.)
// - Runs checks ONE AT A TIME with a fixed pause after each request
//
// The fixed delay is the whole throttling policy: no retries, no backoff.
// The client is built once per run and shared by every request.
// =============================================================================

use super::classify::ExternalLink;
use super::{BrokenDetail, BrokenLink, Progress};
use crate::config::HttpConfig;
use crate::error::CheckerError;
use reqwest::{redirect::Policy, Client};
use std::error::Error as _;
use tracing::debug;
use url::Url;

/// Client identification sent with every request
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; doc-link-guardian/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Error details longer than this are cut in progress output
pub const MAX_DETAIL_DISPLAY: usize = 100;

/// Outcome of probing a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Final response had a status below 400
    Ok(u16),
    /// Final response had a status of 400 or above
    Status(u16),
    /// The request never produced a response
    Error(String),
}

// Builds the shared HTTP client
//
// - timeout: per-request limit, covers connect + response headers
// - redirects: followed up to 10 hops, the final hop's status counts
pub fn build_client(config: &HttpConfig) -> Result<Client, CheckerError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .redirect(Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

// Checks every external link in order and returns the broken ones
//
// After each request - successful or not - we sleep for `config.delay`.
pub async fn check_external_links(
    client: &Client,
    links: &[ExternalLink],
    config: &HttpConfig,
    progress: &Progress,
) -> Vec<BrokenLink> {
    progress.line("🌐 Checking external links...");

    let mut broken = Vec::new();

    for link in links {
        match check_url(client, &link.url).await {
            RequestOutcome::Ok(status) => {
                debug!(url = %link.url, status, "link ok");
                progress.line(&format!("✅ {}", link.url));
            }
            RequestOutcome::Status(status) => {
                progress.line(&format!(
                    "❌ {}: {} (Status: {})",
                    link.source.display(),
                    link.url,
                    status
                ));
                broken.push(BrokenLink {
                    source: link.source.clone(),
                    link: link.url.clone(),
                    detail: BrokenDetail::Status(status),
                });
            }
            RequestOutcome::Error(message) => {
                progress.line(&format!(
                    "❌ {}: {} (Error: {})",
                    link.source.display(),
                    link.url,
                    truncate(&message, MAX_DETAIL_DISPLAY)
                ));
                broken.push(BrokenLink {
                    source: link.source.clone(),
                    link: link.url.clone(),
                    detail: BrokenDetail::Error(message),
                });
            }
        }

        // Fixed-rate throttle, applied regardless of outcome
        tokio::time::sleep(config.delay).await;
    }

    broken
}

// Checks a single URL with a HEAD request
pub async fn check_url(client: &Client, url: &str) -> RequestOutcome {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => return RequestOutcome::Error(format!("Invalid URL: {}", e)),
    };

    match client.head(parsed).send().await {
        Ok(response) => {
            let status = response.status();
            if status.as_u16() >= 400 {
                RequestOutcome::Status(status.as_u16())
            } else {
                RequestOutcome::Ok(status.as_u16())
            }
        }
        Err(e) => RequestOutcome::Error(describe_error(&e)),
    }
}

// Turns a reqwest error into a human-readable detail string
//
// reqwest's top-level message is usually just "error sending request for
// url (...)"; the interesting part (DNS failure, refused connection,
// certificate problem) lives in the source chain, so we append it.
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "Request timed out".to_string();
    }
    if error.is_redirect() {
        return "Too many redirects".to_string();
    }

    let mut message = if error.is_connect() {
        "Connection failed".to_string()
    } else {
        error.to_string()
    };

    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

// Shortens a string for display, cutting on a char boundary
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
