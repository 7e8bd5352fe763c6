//! Lookup collaborator: the third-party geolocation API and the echo
//! services used to discover this host's public address.

mod client;
mod echo;
mod types;

pub use client::{fetch_record, lookup_url};
pub use echo::discover_public_ip;
pub use types::RawLookupRecord;
