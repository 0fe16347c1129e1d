use crate::config::types::{Config, FetchConfig, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_categories(&config.categories)?;
    validate_search_config(&config.search)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates the category term list
fn validate_categories(categories: &[String]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category term is required".to_string(),
        ));
    }

    for category in categories {
        // Every category must survive filename sanitization
        if !category.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "category '{}' contains no usable filename characters",
                category
            )));
        }
    }

    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.endpoint.is_empty() {
        return Err(ConfigError::Validation(
            "search endpoint cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::Validation(format!("invalid search endpoint '{}': {}", config.endpoint, e))
    })?;

    if config.limit < 1 {
        return Err(ConfigError::Validation(format!(
            "limit must be >= 1, got {}",
            config.limit
        )));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.request_timeout < config.connect_timeout {
        return Err(ConfigError::Validation(format!(
            "request_timeout ({:?}) must be >= connect_timeout ({:?})",
            config.request_timeout, config.connect_timeout
        )));
    }

    Ok(())
}
