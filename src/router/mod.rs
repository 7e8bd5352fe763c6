//! Request routing: which address a request wants profiled.
//!
//! Paths of the form `/ip/<candidate>` name the target directly. Without a
//! usable candidate the caller's own address is used, taken from proxy
//! headers or the TCP peer; as a last resort the server's public address is
//! discovered through echo services.

mod client_ip;
mod path;
mod target;


pub use client_ip::detect_client_ip;
pub use path::{is_hostname, parse_route, RouteCandidate};
pub use target::{resolve_hostname, resolve_target, RouteDecision, TargetSource};
