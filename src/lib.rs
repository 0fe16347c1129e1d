//! Rockhound: a rock-sample image harvester
//!
//! This crate downloads the first N image-search results for each rock type,
//! normalizes them to PNG, and records credits (source URL to local file)
//! as CSV and JSON ledgers.

pub mod config;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod search;

use thiserror::Error;

/// Main error type for rockhound operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing credentials: set {0} in the environment or a .env file")]
    MissingCredentials(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for rockhound operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{RateLimiter, RetryPolicy};
pub use output::CreditRecord;
pub use pipeline::Harvester;
