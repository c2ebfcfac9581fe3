use serde::Deserialize;
use std::time::Duration;

/// Default per-download timeout in seconds
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of redirects followed per request
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Main configuration structure for Link-Harvester
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub harvest: HarvestConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Timeout applied to each file download (seconds)
    #[serde(rename = "download-timeout-secs", default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// Timeout for the listing page request; unbounded when absent
    #[serde(rename = "listing-timeout-secs", default)]
    pub listing_timeout_secs: Option<u64>,

    /// Maximum redirects followed per request
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpConfig {
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    pub fn listing_timeout(&self) -> Option<Duration> {
        self.listing_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            download_timeout_secs: default_download_timeout(),
            listing_timeout_secs: None,
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

/// Link collection configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarvestConfig {
    /// Prefix prepended to relative hrefs instead of the listing URL's origin
    #[serde(default)]
    pub prefix: Option<String>,
}

fn default_download_timeout() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT_SECS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
