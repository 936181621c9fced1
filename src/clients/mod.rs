/// Chartmetric API client
pub mod chartmetric;
/// Data entities for artists and stat sources
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Per-artist CSV storage
pub mod local_storage;

pub use chartmetric::ChartmetricClient;
pub use local_storage::CsvStore;
