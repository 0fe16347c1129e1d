use crate::config::Config;
use crate::fetch::{fetch_with_retry, RateLimiter, RetryPolicy};
use crate::search::types::{SearchItem, SearchPage};
use reqwest::Client;

/// The API rejects start offsets past this value
pub const MAX_START_OFFSET: usize = 91;

/// The API serves at most this many items per page
pub const MAX_PAGE_SIZE: usize = 10;

/// Paged search client
///
/// Owns the search-class rate limiter so every API call, first page or
/// not, is spaced by the configured interval.
pub struct SearchClient {
    http: Client,
    endpoint: String,
    api_key: String,
    cx: String,
    rights: Option<String>,
    limiter: RateLimiter,
    policy: RetryPolicy,
}

impl SearchClient {
    /// Creates a search client from the run configuration
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: config.search.endpoint.clone(),
            api_key: config.credentials.api_key.clone(),
            cx: config.credentials.cx.clone(),
            rights: config.search.rights.clone(),
            limiter: RateLimiter::new(config.fetch.search_interval),
            policy: RetryPolicy::from_config(&config.fetch),
        }
    }

    /// Gathers up to `limit` result items for one query string
    ///
    /// Pages through the API from offset 1, requesting at most
    /// [`MAX_PAGE_SIZE`] items per page and advancing by the number of
    /// items actually returned. Stops at the requested total, an empty
    /// page, the offset cap, or any fetch/decode failure. Failures never
    /// escape this boundary: whatever was collected so far is returned.
    pub async fn collect_items(&mut self, query: &str, limit: usize) -> Vec<SearchItem> {
        let mut results: Vec<SearchItem> = Vec::new();
        let mut start = 1usize;

        while results.len() < limit && start <= MAX_START_OFFSET {
            let page_size = MAX_PAGE_SIZE.min(limit - results.len());
            let params = self.page_params(query, page_size, start);

            let response = match fetch_with_retry(
                &self.http,
                &self.endpoint,
                Some(&params),
                &mut self.limiter,
                &self.policy,
            )
            .await
            {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(start, error = %e, "Search request failed, keeping partial results");
                    break;
                }
            };

            let page: SearchPage = match response.json().await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(start, error = %e, "Search response was not valid JSON, keeping partial results");
                    break;
                }
            };

            let items = page.items.unwrap_or_default();
            if items.is_empty() {
                break;
            }

            let got = items.len();
            tracing::debug!(start, got, "Search page fetched");
            results.extend(items);
            start += got;
        }

        results.truncate(limit);
        results
    }

    /// Request parameters for one page
    fn page_params(&self, query: &str, num: usize, start: usize) -> Vec<(String, String)> {
        let mut params = vec![
            ("key".to_string(), self.api_key.clone()),
            ("cx".to_string(), self.cx.clone()),
            ("q".to_string(), query.to_string()),
            ("searchType".to_string(), "image".to_string()),
            ("num".to_string(), num.to_string()),
            ("start".to_string(), start.to_string()),
        ];

        if let Some(rights) = &self.rights {
            params.push(("rights".to_string(), rights.clone()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, FetchConfig, OutputConfig, SearchConfig};
    use std::path::PathBuf;

    fn create_test_config(rights: Option<String>) -> Config {
        Config {
            credentials: Credentials {
                api_key: "k".to_string(),
                cx: "c".to_string(),
            },
            categories: vec!["Basalt".to_string()],
            search: SearchConfig {
                endpoint: "http://127.0.0.1:1/customsearch".to_string(),
                limit: 10,
                query_suffix: "rock sample".to_string(),
                rights,
                domains: vec![],
                sites: vec![],
            },
            fetch: FetchConfig::default(),
            output: OutputConfig {
                root: PathBuf::from("out"),
            },
        }
    }

    fn create_test_client(rights: Option<String>) -> SearchClient {
        let config = create_test_config(rights);
        SearchClient::new(Client::new(), &config)
    }

    #[test]
    fn test_page_params_without_rights() {
        let client = create_test_client(None);
        let params = client.page_params("Basalt rock sample", 10, 1);

        assert!(params.contains(&("key".to_string(), "k".to_string())));
        assert!(params.contains(&("cx".to_string(), "c".to_string())));
        assert!(params.contains(&("searchType".to_string(), "image".to_string())));
        assert!(params.contains(&("num".to_string(), "10".to_string())));
        assert!(params.contains(&("start".to_string(), "1".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "rights"));
    }

    #[test]
    fn test_page_params_with_rights() {
        let client = create_test_client(Some("cc_publicdomain|cc_attribute".to_string()));
        let params = client.page_params("Basalt", 5, 11);

        assert!(params.contains(&(
            "rights".to_string(),
            "cc_publicdomain|cc_attribute".to_string()
        )));
        assert!(params.contains(&("num".to_string(), "5".to_string())));
        assert!(params.contains(&("start".to_string(), "11".to_string())));
    }
}
