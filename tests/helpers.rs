// Shared test helpers: a mock lookup API and a live server on a random port.

use std::net::SocketAddr;

use httptest::{matchers::*, responders::*, Expectation, Server};
use ipyard::annotation::AnnotationStore;
use ipyard::initialization::{init_client, init_resolver};
use ipyard::{AppState, Config};
use tokio_util::sync::CancellationToken;

/// Lookup record for 1.1.1.1 as the API reports it.
#[allow(dead_code)]
pub fn cloudflare_record() -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "continent": "Oceania",
        "country": "Australia",
        "countryCode": "AU",
        "region": "QLD",
        "regionName": "Queensland",
        "city": "South Brisbane",
        "zip": "4101",
        "lat": -27.4766,
        "lon": 153.0166,
        "timezone": "Australia/Brisbane",
        "isp": "Cloudflare, Inc",
        "org": "APNIC and Cloudflare DNS Resolver project",
        "as": "AS13335 Cloudflare, Inc.",
        "asname": "CLOUDFLARENET",
        "reverse": "one.one.one.one",
        "mobile": false,
        "proxy": false,
        "hosting": true,
        "query": "1.1.1.1"
    })
}

/// Registers a lookup response for `ip` on the mock API.
#[allow(dead_code)]
pub fn expect_lookup(server: &Server, ip: &str, body: serde_json::Value) {
    server.expect(
        Expectation::matching(request::method_path("GET", format!("/json/{}", ip)))
            .respond_with(json_encoded(body)),
    );
}

/// Config pointing at the mock API with no echo services.
pub fn test_config(server: &Server) -> Config {
    Config {
        lookup_base_url: format!("http://{}", server.addr()),
        timeout_seconds: 5,
        dns_domain: "dns.ipyard.test".to_string(),
        ip_echo_services: vec![],
        ..Default::default()
    }
}

pub fn test_state(config: Config, annotations: AnnotationStore) -> AppState {
    let client = init_client(&config).expect("Failed to create HTTP client");
    let resolver = init_resolver().expect("Failed to create resolver");
    AppState::new(config, client, resolver, annotations)
}

/// A running server and the token that stops it.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub cancel: CancellationToken,
    pub handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

#[allow(dead_code)]
impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
    }
}

#[allow(dead_code)]
pub async fn spawn_server(state: AppState) -> RunningServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(ipyard::server::serve(listener, state, cancel.clone()));
    RunningServer {
        addr,
        cancel,
        handle,
    }
}
