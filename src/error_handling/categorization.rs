//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{LookupError, LookupErrorKind};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum retries: `RETRY_MAX_ATTEMPTS`
///
/// `ExponentialBackoff` yields `base^n * factor` for `n = 1, 2, ...`, so the
/// growth rate goes in as the base and the initial delay divided by it as the
/// multiplier. With the defaults this waits 250 ms, then 500 ms.
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::RetryIf`.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Categorizes a `reqwest::Error` into a `LookupErrorKind`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> LookupErrorKind {
    if error.is_timeout() {
        LookupErrorKind::HttpTimeout
    } else if error.is_connect() {
        LookupErrorKind::HttpConnect
    } else if error.is_status() {
        LookupErrorKind::HttpStatus
    } else if error.is_decode() || error.is_body() {
        LookupErrorKind::HttpDecode
    } else {
        LookupErrorKind::HttpOther
    }
}

/// Determines whether a lookup error is transient.
///
/// Timeouts, connection failures, 429 and 5xx responses are retried. A
/// non-success status in the response body is an answer, not a transient
/// failure, and is never retried.
pub fn is_retriable(error: &LookupError) -> bool {
    match error {
        LookupError::Http(e) => {
            if let Some(status) = e.status() {
                let code = status.as_u16();
                return code == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS
                    || status.is_server_error();
            }
            e.is_timeout() || e.is_connect()
        }
        LookupError::Status { .. } | LookupError::NoPublicAddress => false,
    }
}
