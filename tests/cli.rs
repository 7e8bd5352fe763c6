//! CLI parsing and subcommand behavior.

mod helpers;

use clap::Parser;
use helpers::{cloudflare_record, expect_lookup, test_config, test_state};
use httptest::{matchers::*, responders::*, Expectation, Server};
use ipyard::annotation::AnnotationStore;
use ipyard::config::AnnotateCommand;
use ipyard::profile::{IpType, SharedUsersBucket};
use ipyard::{annotate, lookup_target, Cli, Command, LogFormat};
use tempfile::tempdir;

fn parse_annotate(args: &[&str]) -> AnnotateCommand {
    let mut argv = vec!["ipyard", "annotate"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Annotate(command) => command,
        other => panic!("expected annotate, got {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "ipyard",
        "serve",
        "--bind",
        "0.0.0.0:9000",
        "--log-format",
        "json",
        "--lang",
        "en",
        "--ip-echo-service",
        "http://a.test/ip",
        "--ip-echo-service",
        "http://b.test/ip",
    ])
    .unwrap();

    assert_eq!(cli.log_format, LogFormat::Json);
    assert_eq!(cli.config.lang, "en");
    assert_eq!(
        cli.config.ip_echo_services,
        vec!["http://a.test/ip", "http://b.test/ip"]
    );
    match cli.command {
        Command::Serve { bind } => assert_eq!(bind.port(), 9000),
        other => panic!("expected serve, got {other:?}"),
    }
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["ipyard"]).is_err());
}

#[test]
fn test_annotate_add_then_show_list_remove() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manual.json");

    let output = annotate(
        &path,
        parse_annotate(&[
            "add",
            "114.114.114.114",
            "--location",
            "中国 江苏 南京",
            "--ip-type",
            "residential",
            "--shared-users",
            "1-10",
            "--longitude",
            "-118.78",
        ]),
    )
    .unwrap();
    assert!(output.is_empty());

    let store = AnnotationStore::load(&path).unwrap();
    let saved = store.get("114.114.114.114").unwrap();
    assert_eq!(saved.ip_type, Some(IpType::Residential));
    assert_eq!(saved.shared_users, Some(SharedUsersBucket::OneToTen));
    assert_eq!(saved.longitude, Some(-118.78));

    let shown = annotate(&path, parse_annotate(&["show", "114.114.114.114"])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(json["locationInfo"], "中国 江苏 南京");

    annotate(&path, parse_annotate(&["add", "1.1.1.1", "--rdns", "one.one.one.one"])).unwrap();
    let listed = annotate(&path, parse_annotate(&["list"])).unwrap();
    assert_eq!(listed, "1.1.1.1\n114.114.114.114");

    annotate(&path, parse_annotate(&["remove", "1.1.1.1"])).unwrap();
    let listed = annotate(&path, parse_annotate(&["list"])).unwrap();
    assert_eq!(listed, "114.114.114.114");
}

#[test]
fn test_annotate_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manual.json");

    assert!(annotate(&path, parse_annotate(&["add", "8.8.8.8"])).is_err());
    assert!(annotate(&path, parse_annotate(&["add", "dns.google", "--rdns", "x"])).is_err());
    assert!(annotate(&path, parse_annotate(&["add", "8.8.8.8", "--risk-score", "101"])).is_err());
    assert!(annotate(&path, parse_annotate(&["remove", "8.8.8.8"])).is_err());
    assert!(annotate(&path, parse_annotate(&["show", "8.8.8.8"])).is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_lookup_target_literal() {
    let lookup = Server::run();
    expect_lookup(&lookup, "1.1.1.1", cloudflare_record());
    let state = test_state(test_config(&lookup), AnnotationStore::default());

    let response = lookup_target(&state, Some(" 1.1.1.1 ")).await.unwrap();
    assert_eq!(response.target_ip, "1.1.1.1");
    assert_eq!(response.profile.risk.score, 77);
    assert!(!response.used_defaults);
}

#[tokio::test]
async fn test_lookup_target_malformed_uses_zero_seed() {
    let lookup = Server::run();
    lookup.expect(
        Expectation::matching(request::method_path("GET", "/json/1.2.3"))
            .respond_with(json_encoded(serde_json::json!({"status": "fail", "message": "invalid query"}))),
    );
    let state = test_state(test_config(&lookup), AnnotationStore::default());

    let response = lookup_target(&state, Some("1.2.3")).await.unwrap();
    assert!(response.used_defaults);
    assert_eq!(response.profile.ip_number, 0);
}

#[tokio::test]
async fn test_lookup_target_own_address() {
    let lookup = Server::run();
    lookup.expect(
        Expectation::matching(request::method_path("GET", "/echo"))
            .respond_with(status_code(200).body("8.8.4.4")),
    );
    expect_lookup(
        &lookup,
        "8.8.4.4",
        serde_json::json!({"status": "success", "isp": "Google LLC", "hosting": true}),
    );
    let mut config = test_config(&lookup);
    config.ip_echo_services = vec![lookup.url_str("/echo")];
    let state = test_state(config, AnnotationStore::default());

    let response = lookup_target(&state, None).await.unwrap();
    assert_eq!(response.target_ip, "8.8.4.4");
    // 70 + 10, jitter +4
    assert_eq!(response.profile.risk.score, 84);
}

#[tokio::test]
async fn test_lookup_target_without_echo_services_fails() {
    let lookup = Server::run();
    let state = test_state(test_config(&lookup), AnnotationStore::default());
    assert!(lookup_target(&state, None).await.is_err());
}
