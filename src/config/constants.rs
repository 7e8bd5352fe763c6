//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including lookup endpoints, timeouts and retry parameters.

/// Base URL of the ip-api.com compatible lookup API
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://ip-api.com";

/// Language requested from the lookup API (country/region names are localized)
pub const DEFAULT_LOOKUP_LANG: &str = "zh-CN";

/// Fields requested from the lookup API.
///
/// Must stay in sync with `RawLookupRecord`; the API omits fields that are
/// not listed here.
pub const LOOKUP_FIELDS: &str = "status,message,continent,country,countryCode,region,regionName,city,district,zip,lat,lon,timezone,isp,org,as,asname,reverse,mobile,proxy,hosting,query";

/// Status value the lookup API reports for a usable record
pub const LOOKUP_STATUS_SUCCESS: &str = "success";

/// Domain returned for `/ip/getdns`
pub const DEFAULT_DNS_DOMAIN: &str = "ipyard.com";

/// Default listen address for `serve`
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default path of the manual annotation file
pub const DEFAULT_ANNOTATIONS_PATH: &str = "manual.json";

/// Echo services queried, in order, when no usable client address is found.
/// Each must answer a plain GET with the caller's IPv4 address as text.
pub const DEFAULT_IP_ECHO_SERVICES: [&str; 3] = [
    "https://api.ipify.org",
    "https://ipv4.icanhazip.com",
    "https://ifconfig.me/ip",
];

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ipyard/", env!("CARGO_PKG_VERSION"));

// Network operation timeouts
/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 250;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum number of retries after the first attempt
pub const RETRY_MAX_ATTEMPTS: usize = 2;

/// HTTP status code for 429 Too Many Requests
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
