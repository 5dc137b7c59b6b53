//! Query evaluation over in-memory content.
//!
//! This module provides:
//! - `query`, the pure filter-then-sort transform
//! - `search`, the same transform with bookkeeping for API consumers
//! - `search_records`, which returns the caller's own records in engine order

mod engine;

// Re-export main functions
pub use engine::{query, search, search_records};
