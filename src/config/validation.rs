use crate::config::types::{Config, HarvestConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

const MAX_TIMEOUT_SECS: u64 = 3600;
const MAX_REDIRECT_LIMIT: usize = 50;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_harvest_config(&config.harvest)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    validate_timeout("download-timeout-secs", config.download_timeout_secs)?;

    if let Some(secs) = config.listing_timeout_secs {
        validate_timeout("listing-timeout-secs", secs)?;
    }

    if config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be at most {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_timeout(key: &str, secs: u64) -> Result<(), ConfigError> {
    if secs < 1 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            key, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

/// Validates link collection configuration
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    if let Some(prefix) = &config.prefix {
        validate_prefix(prefix)?;
    }
    Ok(())
}

/// Validates a user-supplied link prefix
///
/// The prefix must be an absolute HTTP(S) URL with a host. A path is allowed,
/// since some mirrors serve the listing below a fixed root.
pub fn validate_prefix(prefix: &str) -> Result<(), ConfigError> {
    let url = Url::parse(prefix)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid prefix '{}': {}", prefix, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Prefix '{}' must use HTTP or HTTPS",
            prefix
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Prefix '{}' has no host",
            prefix
        )));
    }

    Ok(())
}
