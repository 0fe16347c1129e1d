//! Paged search client
//!
//! Gathers result items for one query string through the rate-limited
//! fetch layer, degrading to partial results on any failure.

mod client;
mod types;

pub use client::{SearchClient, MAX_PAGE_SIZE, MAX_START_OFFSET};
pub use types::{ImageInfo, SearchItem, SearchPage};
