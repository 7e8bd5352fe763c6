//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! error categories tracked by `LookupStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// A string that is not a four-segment dotted-quad.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpFormatError {
    #[error("Invalid dotted-quad address: {0:?}")]
    InvalidFormat(String),
}

/// Failures of the lookup collaborator (lookup API and echo services).
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport or HTTP status failure.
    #[error("Lookup request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The lookup API answered, but not with `status == "success"`.
    #[error("Lookup API returned status {status:?}: {message}")]
    Status { status: String, message: String },

    /// None of the echo services produced an IPv4 address.
    #[error("No echo service returned a usable IPv4 address")]
    NoPublicAddress,
}

impl LookupError {
    /// Statistics category for this error.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Http(e) => super::categorization::categorize_reqwest_error(e),
            LookupError::Status { .. } => LookupErrorKind::LookupStatus,
            LookupError::NoPublicAddress => LookupErrorKind::NoPublicAddress,
        }
    }
}

/// Target resolution failures.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Neither the path, the headers, the peer address nor any echo service
    /// yielded a usable address.
    #[error("Could not determine a target address: {0}")]
    Unresolvable(#[source] LookupError),
}

/// Annotation file and validation errors.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Annotation file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Annotation file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not an IPv4 address: {0:?}")]
    InvalidAddress(String),

    #[error("Risk score {0} is outside 0-100")]
    RiskScoreOutOfRange(u32),
}

/// Categories of lookup failures counted by `LookupStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    HttpTimeout,
    HttpConnect,
    HttpStatus,
    HttpDecode,
    HttpOther,
    /// Lookup API reported a non-success status (reserved range, quota, ...)
    LookupStatus,
    NoPublicAddress,
    /// Target string was not a dotted quad; the zero seed was used
    InvalidAddress,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::HttpTimeout => "http_timeout",
            LookupErrorKind::HttpConnect => "http_connect",
            LookupErrorKind::HttpStatus => "http_status",
            LookupErrorKind::HttpDecode => "http_decode",
            LookupErrorKind::HttpOther => "http_other",
            LookupErrorKind::LookupStatus => "lookup_status",
            LookupErrorKind::NoPublicAddress => "no_public_address",
            LookupErrorKind::InvalidAddress => "invalid_address",
        }
    }
}
