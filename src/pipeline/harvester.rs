//! Harvest run loop
//!
//! Composes the pieces linearly per category term: build the query,
//! gather result items, then fetch, normalize, and persist each item,
//! accumulating provenance records. Ledgers are written once at the end
//! from whatever was accumulated, even when categories came up empty.

use crate::config::Config;
use crate::fetch::{build_http_client, fetch_with_retry, RateLimiter, RetryPolicy};
use crate::output::{write_credits_csv, write_credits_json, CreditRecord};
use crate::pipeline::naming::{build_filename, safe_name};
use crate::pipeline::normalize;
use crate::query::{build_domain_clause, build_query, build_site_clause};
use crate::search::{SearchClient, SearchItem};
use crate::Result;
use reqwest::Client;
use std::fs;
use std::path::Path;

/// Counters reported at the end of a run
#[derive(Debug, Default)]
pub struct HarvestSummary {
    /// Categories processed, including ones that yielded nothing
    pub categories: usize,

    /// Images saved across all categories
    pub saved: usize,

    /// Result items skipped (bad link, failed fetch, undecodable, write failure)
    pub skipped: usize,
}

/// Drives one complete harvest run
pub struct Harvester {
    config: Config,
    http: Client,
    search: SearchClient,
    download_limiter: RateLimiter,
    policy: RetryPolicy,
    credits: Vec<CreditRecord>,
}

impl Harvester {
    /// Creates a harvester from a validated configuration
    ///
    /// Builds the HTTP client and both rate limiters once; everything
    /// downstream borrows them.
    pub fn new(config: Config) -> Result<Self> {
        let http = build_http_client(&config.fetch)?;
        let search = SearchClient::new(http.clone(), &config);
        let download_limiter = RateLimiter::new(config.fetch.download_interval);
        let policy = RetryPolicy::from_config(&config.fetch);

        Ok(Self {
            config,
            http,
            search,
            download_limiter,
            policy,
            credits: Vec::new(),
        })
    }

    /// Runs the harvest across all configured categories
    pub async fn run(mut self) -> Result<HarvestSummary> {
        fs::create_dir_all(&self.config.output.root)?;

        let domain_clause = build_domain_clause(&self.config.search.domains);
        let site_clause = build_site_clause(&self.config.search.sites);

        let mut summary = HarvestSummary::default();
        let categories = self.config.categories.clone();

        for category in &categories {
            let category_dir = self.config.output.root.join(safe_name(category));
            fs::create_dir_all(&category_dir)?;

            let query = build_query(
                category,
                &self.config.search.query_suffix,
                &domain_clause,
                &site_clause,
            );
            tracing::info!(category = %category, query = %query, "Searching");

            let items = self
                .search
                .collect_items(&query, self.config.search.limit)
                .await;
            summary.categories += 1;

            if items.is_empty() {
                tracing::info!(category = %category, "No results");
                continue;
            }

            let (saved, skipped) = self.process_items(category, &category_dir, &items).await;
            tracing::info!(category = %category, saved, skipped, "Category finished");
            summary.saved += saved;
            summary.skipped += skipped;
        }

        self.write_ledgers();
        Ok(summary)
    }

    /// Turns result items into saved files and provenance records
    ///
    /// Every failure mode skips the item and moves on; nothing here
    /// aborts the run. Returns (saved, skipped) counts for the category.
    async fn process_items(
        &mut self,
        category: &str,
        category_dir: &Path,
        items: &[SearchItem],
    ) -> (usize, usize) {
        let mut saved = 0usize;
        let mut skipped = 0usize;

        for item in items {
            let Some(link) = item.best_link() else {
                tracing::warn!(category = %category, "Result has no usable link, skipping");
                skipped += 1;
                continue;
            };

            tracing::info!(category = %category, link, "Fetching image");
            let response = match fetch_with_retry(
                &self.http,
                link,
                None,
                &mut self.download_limiter,
                &self.policy,
            )
            .await
            {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(link, error = %e, "Download failed, skipping");
                    skipped += 1;
                    continue;
                }
            };

            let bytes = match response.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(link, error = %e, "Failed to read image body, skipping");
                    skipped += 1;
                    continue;
                }
            };

            let png = match normalize::to_png_bytes(&bytes) {
                Ok(png) => png,
                Err(e) => {
                    tracing::warn!(link, error = %e, "Not a decodable image, skipping");
                    skipped += 1;
                    continue;
                }
            };

            saved += 1;
            let filename = build_filename(category, saved);
            let dest = category_dir.join(&filename);

            match fs::write(&dest, &png) {
                Ok(()) => {
                    // Ledger paths use forward slashes regardless of platform
                    let relative = format!("{}/{}", safe_name(category), filename);
                    tracing::info!(file = %relative, "Saved");
                    self.credits.push(CreditRecord {
                        rock: category.to_string(),
                        file: relative,
                        url: link.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(path = %dest.display(), error = %e, "Write failed, skipping");
                    // Release the index so numbering stays contiguous
                    saved -= 1;
                    skipped += 1;
                }
            }
        }

        (saved, skipped)
    }

    /// Writes both credit ledgers from the accumulated records
    ///
    /// A failure on one ledger is logged and does not block the other.
    fn write_ledgers(&self) {
        let csv_path = self.config.output.root.join("credits.csv");
        match write_credits_csv(&csv_path, &self.credits) {
            Ok(()) => {
                tracing::info!(path = %csv_path.display(), records = self.credits.len(), "Credits CSV written")
            }
            Err(e) => tracing::error!(path = %csv_path.display(), error = %e, "Failed to write credits CSV"),
        }

        let json_path = self.config.output.root.join("credits.json");
        match write_credits_json(&json_path, &self.credits) {
            Ok(()) => {
                tracing::info!(path = %json_path.display(), records = self.credits.len(), "Credits JSON written")
            }
            Err(e) => tracing::error!(path = %json_path.display(), error = %e, "Failed to write credits JSON"),
        }
    }
}
