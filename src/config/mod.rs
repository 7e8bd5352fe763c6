//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, retry parameters)
//! - HTTP header name constants used for client address detection
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AnnotateAddArgs, AnnotateCommand, Cli, Command, Config, LogFormat, LogLevel};
