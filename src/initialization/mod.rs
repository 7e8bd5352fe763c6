//! Process-wide resource setup: logger, HTTP client and DNS resolver.

mod client;
mod logger;
mod resolver;

pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
