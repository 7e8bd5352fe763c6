//! "What is my IP" echo services.

use std::net::Ipv4Addr;

use log::{debug, warn};

use crate::error_handling::LookupError;

async fn query_service(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// Asks each echo service in turn for this host's public IPv4 address.
///
/// A service that fails or answers with anything other than an IPv4 literal
/// is skipped. No retries are made beyond moving to the next service.
///
/// # Errors
///
/// Returns `LookupError::NoPublicAddress` when no service produced an address.
pub async fn discover_public_ip(
    client: &reqwest::Client,
    services: &[String],
) -> Result<Ipv4Addr, LookupError> {
    for service in services {
        match query_service(client, service).await {
            Ok(body) => match body.trim().parse::<Ipv4Addr>() {
                Ok(addr) => {
                    debug!("Echo service {} reported {}", service, addr);
                    return Ok(addr);
                }
                Err(_) => warn!("Echo service {} returned a non-IPv4 body", service),
            },
            Err(e) => warn!("Echo service {} failed: {}", service, e),
        }
    }
    Err(LookupError::NoPublicAddress)
}
