//! Fetch-and-normalize pipeline
//!
//! Turns one search result item into one saved PNG plus one provenance
//! record, or skips it cleanly; the harvester composes this per category.

mod harvester;
mod naming;
pub mod normalize;

pub use harvester::{Harvester, HarvestSummary};
pub use naming::{build_filename, safe_name};
