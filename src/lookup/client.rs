//! Lookup API client.

use log::{debug, warn};
use tokio_retry::RetryIf;

use super::types::RawLookupRecord;
use crate::config::{Config, LOOKUP_FIELDS};
use crate::error_handling::{get_retry_strategy, is_retriable, LookupError};

/// Builds the request URL for `ip`.
pub fn lookup_url(config: &Config, ip: &str) -> String {
    format!(
        "{}/json/{}?lang={}&fields={}",
        config.lookup_base_url.trim_end_matches('/'),
        ip,
        config.lang,
        LOOKUP_FIELDS
    )
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<RawLookupRecord, LookupError> {
    let record = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<RawLookupRecord>()
        .await?;
    Ok(record)
}

/// Fetches the lookup record for `ip`.
///
/// Transient failures (timeouts, connection errors, 429, 5xx) are retried
/// with exponential backoff. A record whose `status` is not `"success"` is
/// returned as `LookupError::Status`.
///
/// # Errors
///
/// Returns `LookupError::Http` when every attempt failed, or
/// `LookupError::Status` when the API declined the query.
pub async fn fetch_record(
    client: &reqwest::Client,
    config: &Config,
    ip: &str,
) -> Result<RawLookupRecord, LookupError> {
    let url = lookup_url(config, ip);
    debug!("Fetching lookup record: {}", url);

    let record = RetryIf::start(
        get_retry_strategy(),
        || fetch_once(client, &url),
        |e: &LookupError| {
            let retry = is_retriable(e);
            if retry {
                warn!("Lookup for {} failed, retrying: {}", ip, e);
            }
            retry
        },
    )
    .await?;

    if !record.is_success() {
        return Err(LookupError::Status {
            status: record.status,
            message: record.message,
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client")
    }

    fn test_config(server: &Server) -> Config {
        Config {
            lookup_base_url: format!("http://{}", server.addr()),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_url_format() {
        let config = Config {
            lookup_base_url: "http://example.test/".to_string(),
            lang: "en".to_string(),
            ..Default::default()
        };
        let url = lookup_url(&config, "8.8.8.8");
        assert!(url.starts_with("http://example.test/json/8.8.8.8?lang=en&fields=status,message,"));
        assert!(url.ends_with(",hosting,query"));
    }

    #[tokio::test]
    async fn test_fetch_record_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/json/1.1.1.1"),
                request::query(url_decoded(contains(("lang", "zh-CN")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "status": "success",
                "isp": "Cloudflare",
                "org": "Cloudflare, Inc.",
                "hosting": true,
                "query": "1.1.1.1"
            }))),
        );

        let record = fetch_record(&test_client(), &test_config(&server), "1.1.1.1")
            .await
            .unwrap();
        assert_eq!(record.isp, "Cloudflare");
        assert!(record.hosting);
    }

    #[tokio::test]
    async fn test_fetch_record_non_success_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/10.0.0.1")).respond_with(
                json_encoded(serde_json::json!({
                    "status": "fail",
                    "message": "private range",
                    "query": "10.0.0.1"
                })),
            ),
        );

        let err = fetch_record(&test_client(), &test_config(&server), "10.0.0.1")
            .await
            .unwrap_err();
        match err {
            LookupError::Status { status, message } => {
                assert_eq!(status, "fail");
                assert_eq!(message, "private range");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_record_client_error_is_not_retried() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
                .times(1)
                .respond_with(status_code(404)),
        );

        let err = fetch_record(&test_client(), &test_config(&server), "8.8.8.8")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_record_retries_server_errors() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/json/8.8.8.8"))
                .times(1 + crate::config::RETRY_MAX_ATTEMPTS)
                .respond_with(status_code(503)),
        );

        let err = fetch_record(&test_client(), &test_config(&server), "8.8.8.8")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Http(_)));
    }
}
