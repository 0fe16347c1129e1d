//! Output module for the provenance ledgers

mod credits;

pub use credits::{write_credits_csv, write_credits_json, CreditRecord};
