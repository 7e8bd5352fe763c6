//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_ANNOTATIONS_PATH, DEFAULT_BIND_ADDR, DEFAULT_DNS_DOMAIN, DEFAULT_IP_ECHO_SERVICES,
    DEFAULT_LOOKUP_BASE_URL, DEFAULT_LOOKUP_LANG, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::headers::HEADER_CF_CONNECTING_IP;
use crate::profile::{IpType, NativeIpStatus, SharedUsersBucket};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration shared by every command.
///
/// Flattened into the CLI, but it can also be constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use ipyard::Config;
///
/// let config = Config {
///     lookup_base_url: "http://127.0.0.1:9000".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Base URL of the ip-api.com compatible lookup API
    #[arg(long = "lookup-url", global = true, default_value = DEFAULT_LOOKUP_BASE_URL)]
    pub lookup_base_url: String,

    /// Language for localized country and region names
    #[arg(long, global = true, default_value = DEFAULT_LOOKUP_LANG)]
    pub lang: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Domain answered on `/ip/getdns`
    #[arg(long, global = true, default_value = DEFAULT_DNS_DOMAIN)]
    pub dns_domain: String,

    /// Manual annotation file (JSON)
    #[arg(long, global = true, default_value = DEFAULT_ANNOTATIONS_PATH)]
    pub annotations: PathBuf,

    /// Header carrying the client address set by a trusted reverse proxy
    #[arg(long, global = true, default_value = HEADER_CF_CONNECTING_IP)]
    pub trusted_proxy_header: String,

    /// "What is my IP" echo service, tried in order (repeatable)
    #[arg(long = "ip-echo-service", global = true, default_values = DEFAULT_IP_ECHO_SERVICES)]
    pub ip_echo_services: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            lang: DEFAULT_LOOKUP_LANG.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            dns_domain: DEFAULT_DNS_DOMAIN.to_string(),
            annotations: PathBuf::from(DEFAULT_ANNOTATIONS_PATH),
            trusted_proxy_header: HEADER_CF_CONNECTING_IP.to_string(),
            ip_echo_services: DEFAULT_IP_ECHO_SERVICES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Serve profiles over HTTP
/// ipyard serve --bind 0.0.0.0:8080
///
/// # Profile one address and print JSON
/// ipyard lookup 1.1.1.1
///
/// # Add a manual override
/// ipyard annotate add 203.0.113.7 --risk-score 10 --ip-type residential
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ipyard",
    version,
    about = "Profiles IP addresses: geolocation, ASN, classification and risk."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP profile server
    Serve {
        /// Listen address
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: SocketAddr,
    },
    /// Profile an IP address or hostname (defaults to this machine's public IP)
    Lookup {
        /// IPv4 address or hostname
        target: Option<String>,
    },
    /// Manage manual annotations
    #[command(subcommand)]
    Annotate(AnnotateCommand),
}

/// Annotation file maintenance.
#[derive(Debug, Subcommand)]
pub enum AnnotateCommand {
    /// Add or replace the annotation for an address
    Add(AnnotateAddArgs),
    /// Remove the annotation for an address
    Remove {
        /// IPv4 address
        ip: String,
    },
    /// List annotated addresses
    List,
    /// Show the annotation for an address
    Show {
        /// IPv4 address
        ip: String,
    },
}

/// Fields accepted by `annotate add`. Every field is optional; only the
/// supplied ones override the looked-up profile.
#[derive(Debug, Clone, Args)]
pub struct AnnotateAddArgs {
    /// IPv4 address
    pub ip: String,
    /// Location line (e.g. "中国 广东 深圳")
    #[arg(long)]
    pub location: Option<String>,
    /// ASN line (e.g. "AS4134")
    #[arg(long)]
    pub asn: Option<String>,
    /// ASN owner name
    #[arg(long)]
    pub asn_owner: Option<String>,
    /// Organization name
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    /// datacenter|residential
    #[arg(long)]
    pub ip_type: Option<IpType>,
    /// Risk score (0-100)
    #[arg(long)]
    pub risk_score: Option<u32>,
    /// native|broadcast
    #[arg(long)]
    pub native_ip: Option<NativeIpStatus>,
    /// 1-10|10-100|100-1000|1000-10000|10000+
    #[arg(long)]
    pub shared_users: Option<SharedUsersBucket>,
    /// Reverse DNS name
    #[arg(long)]
    pub rdns: Option<String>,
    /// Country flag glyph or code
    #[arg(long)]
    pub country_flag: Option<String>,
}
