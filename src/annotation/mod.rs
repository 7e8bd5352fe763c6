//! Manual per-address overrides.
//!
//! The annotation file is loaded once at startup and shared read-only by
//! request handlers; the `annotate` subcommands edit it offline.

mod merge;
mod store;
mod types;


pub use merge::apply_annotation;
pub use store::{AnnotationStore, MAX_RISK_SCORE};
pub use types::ManualAnnotation;
