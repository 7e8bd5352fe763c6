//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the resolver used for hostname route targets.
///
/// Uses hickory's default upstream configuration with short timeouts so a
/// slow DNS server cannot stall a request for long.
///
/// # Errors
///
/// Does not fail with the default upstream configuration.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver() {
        assert!(init_resolver().is_ok());
    }
}
