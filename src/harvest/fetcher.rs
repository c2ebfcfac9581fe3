//! HTTP fetcher implementation
//!
//! This module handles every HTTP request the harvester makes:
//! - Building the shared HTTP client
//! - Downloading individual files with a per-request timeout
//! - Classifying failures into tagged outcomes

use crate::config::HttpConfig;
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::time::Duration;

/// Result of downloading a single file
///
/// Failures never escape as errors: callers branch on the variant and treat
/// anything other than [`FetchOutcome::Fetched`] as "skip this link".
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered with a 2xx status
    Fetched {
        /// The requested URL
        url: String,
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Response body
        bytes: Vec<u8>,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status_code: u16,
    },

    /// The request never produced a usable response (connect, timeout, redirect
    /// limit, body read)
    NetworkError {
        /// The requested URL
        url: String,
        /// Error description
        error: String,
    },
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetched {
                url,
                status_code,
                bytes,
                ..
            } => write!(f, "Fetched {} (HTTP {}, {} bytes)", url, status_code, bytes.len()),
            Self::HttpError { url, status_code } => {
                write!(f, "Error while requesting {}: HTTP {}", url, status_code)
            }
            Self::NetworkError { url, error } => {
                write!(f, "Error while requesting {}: {}", url, error)
            }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed automatically up to `max-redirects`. No global
/// timeout is set; timeouts are applied per request so the listing page and
/// the downloads can use different limits.
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use link_harvester::config::HttpConfig;
/// use link_harvester::harvest::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads a single file
///
/// # Error Classification
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | HTTP 2xx | `Fetched` |
/// | Any other status | `HttpError` |
/// | Timeout | `NetworkError` ("Request timeout") |
/// | Connection refused / DNS | `NetworkError` ("Connection failed") |
/// | Redirect limit exceeded | `NetworkError` ("Too many redirects") |
/// | Body read failure | `NetworkError` |
///
/// Every failure is logged with the requested URL before being returned.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to download
/// * `timeout` - Total time allowed for the request, body included
pub async fn fetch_file(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    let outcome = request_file(client, url, timeout).await;

    match &outcome {
        FetchOutcome::Fetched { .. } => tracing::debug!("{}", outcome),
        _ => tracing::warn!("{}", outcome),
    }

    outcome
}

async fn request_file(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::NetworkError {
                url: url.to_string(),
                error: classify_error(&e),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            url: url.to_string(),
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();

    match response.bytes().await {
        Ok(body) => FetchOutcome::Fetched {
            url: url.to_string(),
            final_url,
            status_code: status.as_u16(),
            bytes: body.to_vec(),
        },
        Err(e) => FetchOutcome::NetworkError {
            url: url.to_string(),
            error: classify_error(&e),
        },
    }
}

/// Describes a transport error for diagnostics
fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timeout: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Too many redirects: {}", e)
    } else {
        e.to_string()
    }
}
