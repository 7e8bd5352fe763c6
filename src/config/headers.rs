//! HTTP header names consulted when detecting the client address.
//!
//! Header lookups through `http::HeaderMap` are case-insensitive, so the
//! canonical spelling is used here.

/// Client address set by a trusted reverse proxy (Cloudflare by default)
pub const HEADER_CF_CONNECTING_IP: &str = "CF-Connecting-IP";

/// Comma-separated chain of forwarded client addresses
pub const HEADER_X_FORWARDED_FOR: &str = "X-Forwarded-For";

/// Single client address set by nginx-style proxies
pub const HEADER_X_REAL_IP: &str = "X-Real-IP";

/// Generic client address header
pub const HEADER_CLIENT_IP: &str = "Client-IP";

/// Headers consulted after the trusted proxy header, in priority order.
pub const CLIENT_IP_HEADERS: &[&str] = &[HEADER_X_FORWARDED_FOR, HEADER_X_REAL_IP, HEADER_CLIENT_IP];
