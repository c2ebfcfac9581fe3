use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Every key is optional; missing sections fall back to their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use link_harvester::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Download timeout: {}s", config.http.download_timeout_secs);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Applies command-line overrides on top of a loaded configuration
///
/// The merged configuration is validated again, so an override is held to
/// the same rules as the file it replaces (a zero timeout or a non-HTTP
/// prefix is rejected).
pub fn apply_overrides(
    mut config: Config,
    prefix: Option<&str>,
    download_timeout_secs: Option<u64>,
) -> Result<Config, ConfigError> {
    if let Some(prefix) = prefix {
        config.harvest.prefix = Some(prefix.to_string());
    }
    if let Some(secs) = download_timeout_secs {
        config.http.download_timeout_secs = secs;
    }

    validate(&config)?;
    Ok(config)
}
