//! Configuration module for rockhound
//!
//! Configuration is assembled from command-line flags and environment
//! credentials, then validated before any network work begins.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, Credentials, FetchConfig, OutputConfig, SearchConfig, DEFAULT_ROCK_TYPES,
    GOOGLE_SEARCH_URL,
};

// Re-export parser helpers
pub use parser::{parse_list, resolve_rights, RIGHTS_CHOICES};

// Re-export validation
pub use validation::validate;
