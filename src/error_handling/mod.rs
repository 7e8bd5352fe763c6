//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror`)
//! - Error categorization and the retry strategy for the lookup client
//! - Lookup statistics tracking (atomic counters per error kind)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy, is_retriable};
pub use stats::LookupStats;
pub use types::{
    AnnotationError, InitializationError, IpFormatError, LookupError, LookupErrorKind,
    RouterError,
};
