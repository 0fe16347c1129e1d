use std::path::PathBuf;
use std::time::Duration;

/// Endpoint for the Google Custom Search JSON API
pub const GOOGLE_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Rock types harvested when no subset is given on the command line
pub const DEFAULT_ROCK_TYPES: [&str; 22] = [
    "Andesite",
    "Basalt",
    "Chert",
    "Coal",
    "Conglomerate",
    "Gabbro",
    "Gneiss",
    "Granite",
    "Hornfels",
    "Limestone",
    "Marble",
    "Migmatite",
    "Mudstone",
    "Phyllite",
    "Quartzite",
    "Rhyolite",
    "Sandstone",
    "Shale",
    "Siltstone",
    "Slate",
    "Travertine",
    "Tuff",
];

/// Main configuration structure for a harvest run
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Category terms to harvest, one output directory each
    pub categories: Vec<String>,
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Static API credentials for the search backend
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key (`GOOGLE_API_KEY`)
    pub api_key: String,

    /// Custom search engine id (`GOOGLE_CSE_CX`)
    pub cx: String,
}

/// Search behavior configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search API endpoint URL
    pub endpoint: String,

    /// Number of images requested per category
    pub limit: usize,

    /// Text appended to every category term in the query
    pub query_suffix: String,

    /// Usage-rights filter tokens, pipe-joined for the API
    pub rights: Option<String>,

    /// TLD restrictions folded into the query as `site:` clauses
    pub domains: Vec<String>,

    /// Host restrictions folded into the query as `site:` clauses
    pub sites: Vec<String>,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Connect timeout for every request
    pub connect_timeout: Duration,

    /// Total request timeout for every request
    pub request_timeout: Duration,

    /// Minimum spacing between search API calls
    pub search_interval: Duration,

    /// Minimum spacing between image downloads
    pub download_interval: Duration,

    /// Attempt budget per fetch, counting the first try
    pub max_attempts: u32,

    /// First retry delay; doubles on each subsequent transient failure
    pub base_backoff: Duration,

    /// Ceiling for the exponential delay
    pub max_backoff: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(20),
            search_interval: Duration::from_millis(600),
            download_interval: Duration::from_millis(200),
            max_attempts: 4,
            base_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// Output layout configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Root directory receiving per-category folders and the credit ledgers
    pub root: PathBuf,
}
