//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use hickory_resolver::TokioAsyncResolver;

use crate::annotation::AnnotationStore;
use crate::config::Config;
use crate::error_handling::LookupStats;
use crate::initialization::{init_client, init_resolver};

/// Everything a request needs, cheap to clone into handlers.
///
/// Only the statistics counters change after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
    pub resolver: Arc<TokioAsyncResolver>,
    pub annotations: Arc<AnnotationStore>,
    pub stats: Arc<LookupStats>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(
        config: Config,
        client: reqwest::Client,
        resolver: Arc<TokioAsyncResolver>,
        annotations: AnnotationStore,
    ) -> Self {
        AppState {
            config: Arc::new(config),
            client,
            resolver,
            annotations: Arc::new(annotations),
            stats: Arc::new(LookupStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }

    /// Builds the HTTP client and resolver and loads the annotation file
    /// named in `config`.
    ///
    /// # Errors
    ///
    /// Fails if the client cannot be built, or the annotation file exists
    /// but cannot be parsed.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let annotations = AnnotationStore::load(&config.annotations).with_context(|| {
            format!(
                "Failed to load annotations from {}",
                config.annotations.display()
            )
        })?;
        Ok(Self::new(config, client, resolver, annotations))
    }
}
