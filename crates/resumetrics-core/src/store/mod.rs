//! SQLite candidate store.

mod candidates;
mod schema;

pub use candidates::CandidateStore;

use crate::error::StoreError;

/// Result type for store operations.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
