//! ipyard: IP geolocation profiles with classification and risk heuristics.
//!
//! Looks an IPv4 address up in an ip-api.com compatible service, classifies
//! it as datacenter or residential, derives a deterministic risk score and
//! shared-users estimate, and merges in manual annotations. The same flow is
//! available as an HTTP service ([`server`]) and from the CLI ([`run`]).
//!
//! # Example
//!
//! ```no_run
//! use ipyard::app::{profile_for_ip, AppState};
//! use ipyard::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let state = AppState::from_config(Config::default())?;
//! let outcome = profile_for_ip(&state, "1.1.1.1").await;
//! println!(
//!     "{} scored {} ({:?})",
//!     outcome.profile.ip, outcome.profile.risk.score, outcome.profile.risk.tier
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Networked functions need a Tokio runtime.

pub mod annotation;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod ip;
pub mod lookup;
pub mod profile;
pub mod router;
mod run;
pub mod server;

// Re-export public API
pub use app::{profile_for_ip, AppState, LookupOutcome};
pub use config::{Cli, Command, Config, LogFormat, LogLevel};
pub use profile::{build_display_profile, fallback_display_profile, DisplayProfile};
pub use run::{annotate, lookup_target, run};
