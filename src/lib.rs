//! cmfetch - Append Chartmetric artist statistics to local CSV files
//!
//! This library fetches a single artist's statistic stream from the
//! Chartmetric API and appends the raw response to a per-artist CSV file.

/// Client modules for interacting with Chartmetric and local storage
pub mod clients;
/// Fetch-then-append orchestration
pub mod fetcher;
