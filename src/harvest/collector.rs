//! Listing page collection
//!
//! Unlike file downloads, a failure here is fatal for the run and is
//! returned as a [`HarvestError`].

use crate::harvest::parser::extract_links;
use crate::url::derive_prefix;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Fetches the listing page body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `listing_url` - URL of the listing page
/// * `timeout` - Optional request timeout; `None` waits indefinitely
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(HarvestError::Http)` - Transport failure
/// * `Err(HarvestError::ListingStatus)` - The server answered with a non-2xx status
pub async fn fetch_listing(
    client: &Client,
    listing_url: &str,
    timeout: Option<Duration>,
) -> Result<String, HarvestError> {
    let mut request = client.get(listing_url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await.map_err(|source| HarvestError::Http {
        url: listing_url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::ListingStatus {
            url: listing_url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| HarvestError::Http {
        url: listing_url.to_string(),
        source,
    })
}

/// Collects the links on a listing page that contain `contains`
///
/// When `prefix` is `None`, the scheme and host of `listing_url` are used.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `listing_url` - URL of the listing page
/// * `contains` - Substring every returned link must contain
/// * `prefix` - Optional prefix for relative hrefs
/// * `timeout` - Optional timeout for the listing request
///
/// # Returns
///
/// Absolute links in document order, possibly empty
///
/// # Example
///
/// ```no_run
/// use link_harvester::harvest::{build_http_client, collect_links};
/// use link_harvester::config::HttpConfig;
///
/// # async fn example() -> link_harvester::Result<()> {
/// let client = build_http_client(&HttpConfig::default())?;
/// let links = collect_links(&client, "https://example.com/data/", ".csv", None, None).await?;
/// for link in links {
///     println!("{}", link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn collect_links(
    client: &Client,
    listing_url: &str,
    contains: &str,
    prefix: Option<&str>,
    timeout: Option<Duration>,
) -> Result<Vec<String>, HarvestError> {
    let prefix = match prefix {
        Some(prefix) => prefix.to_string(),
        None => derive_prefix(listing_url)?,
    };

    tracing::info!("Collecting links from {}", listing_url);
    let body = fetch_listing(client, listing_url, timeout).await?;

    let links = extract_links(&body, &prefix, contains);
    tracing::info!(
        "Found {} links containing '{}' (prefix {})",
        links.len(),
        contains,
        prefix
    );

    Ok(links)
}
