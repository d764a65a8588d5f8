//! Integration tests for run_diagnostics_with
//!
//! These tests drive whole modes: catalog download, lookups and the report
//! written to the output file.

mod helpers;

use std::fs::{self, File};
use std::io;

use helpers::{config_for, engine_for, ScriptedResolver};
use lancache_diagnostics::app::run_request;
use lancache_diagnostics::report::OutputSink;
use lancache_diagnostics::{
    run_diagnostics_with, Cdn, DiagnosticsRequest, Mode, Resolver, ResolverSet,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn lancache_with_steam_list() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Lancache-Processed-By", "node-7"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/steam.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "# Steam\nlancache.steamcontent.com\n*.steamcontent.com\n\n",
        ))
        .mount(&server)
        .await;
    server
}

fn file_sink(dir: &TempDir) -> (OutputSink, std::path::PathBuf) {
    let path = dir.path().join("diagnostics.txt");
    let file = File::create(&path).unwrap();
    (
        OutputSink::new(Box::new(io::sink()), Some(Box::new(file))),
        path,
    )
}

#[tokio::test]
async fn test_simple_mode_uses_system_resolver_only() {
    let server = lancache_with_steam_list().await;
    let config = config_for(&server);
    let engine = engine_for(&server, ScriptedResolver::loopback());
    let dir = TempDir::new().unwrap();
    let (mut sink, output) = file_sink(&dir);
    let request = DiagnosticsRequest {
        mode: Mode::Simple,
        cdns: Vec::new(),
        resolvers: ResolverSet::system_only()
            .with_explicit([Resolver::Explicit("10.0.0.53:53".parse().unwrap())]),
    };

    let summary = run_diagnostics_with(&engine, &config, &request, &mut sink)
        .await
        .unwrap();
    drop(sink);

    assert_eq!(summary.reports, 1);
    assert_eq!(summary.consistent, 1);
    assert_eq!(summary.successful_lookups, 3);
    assert!(summary.all_consistent());
    let text = fs::read_to_string(output).unwrap();
    assert_eq!(
        text,
        "Looking up steamcontent.test diagnostics address...\n\
         Successfully ran 3 diagnostics iteration(s) with system resolver\n\n"
    );
}

#[tokio::test]
async fn test_custom_mode_probes_selected_cdn_list() {
    let server = lancache_with_steam_list().await;
    let config = config_for(&server);
    let engine = engine_for(&server, ScriptedResolver::loopback());
    let dir = TempDir::new().unwrap();
    let (mut sink, output) = file_sink(&dir);
    let request = DiagnosticsRequest {
        mode: Mode::Custom,
        cdns: vec![*Cdn::find("steam").unwrap()],
        resolvers: ResolverSet::system_only(),
    };

    let summary = run_diagnostics_with(&engine, &config, &request, &mut sink)
        .await
        .unwrap();
    drop(sink);

    assert_eq!(summary.consistent, 1);
    assert_eq!(summary.successful_lookups, 2);
    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("Looking up CDN: Steam diagnostics addresses...\n"));
    assert!(text.contains("Successfully ran 1 diagnostics iteration(s) on 2 host(s) with system resolver\n"));
    // Custom mode does not list attempts.
    assert!(!text.contains("Successful lookups:"));
}

#[tokio::test]
async fn test_full_mode_covers_every_cdn_and_lists_attempts() {
    let server = lancache_with_steam_list().await;
    let config = config_for(&server);
    let engine = engine_for(&server, ScriptedResolver::loopback());
    let dir = TempDir::new().unwrap();
    let (mut sink, output) = file_sink(&dir);
    let request = DiagnosticsRequest {
        mode: Mode::Full,
        cdns: Vec::new(),
        resolvers: ResolverSet::system_only(),
    };

    let summary = run_diagnostics_with(&engine, &config, &request, &mut sink)
        .await
        .unwrap();
    drop(sink);

    // One simple report, then one report per catalog CDN.
    assert_eq!(summary.reports, 1 + lancache_diagnostics::CDNS.len());
    // Only the Steam list exists on the mock catalog; the rest are empty.
    assert_eq!(summary.consistent, 2);
    assert_eq!(summary.no_cache_detected, lancache_diagnostics::CDNS.len() - 1);
    assert!(!summary.all_consistent());

    let text = fs::read_to_string(output).unwrap();
    assert!(text.starts_with("Looking up steamcontent.test diagnostics address...\n"));
    assert!(text.contains("Looking up CDN: Xbox Live diagnostics addresses...\n"));
    assert!(text.contains("Unable to detect any LANCache instances with system resolver\n"));
    assert!(text.contains("Successful lookups: 2\n+{resolver: system, hostname: lancache.steamcontent.com"));
    assert!(text.contains("+{resolver: system, hostname: lancachetest.steamcontent.com"));
}

#[tokio::test]
async fn test_run_request_writes_network_context_and_report() {
    let server = lancache_with_steam_list().await;
    let mut config = config_for(&server);
    // A literal target needs no DNS, so the real resolver can be used.
    config.simple_target = "127.0.0.1".to_string();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("diagnostics.txt");
    let request = DiagnosticsRequest {
        mode: Mode::Simple,
        cdns: Vec::new(),
        resolvers: ResolverSet::system_only(),
    };
    let nameservers = ["10.0.0.53:53".parse().unwrap()];

    let summary = run_request(&config, &request, Some(&output), &nameservers)
        .await
        .unwrap();

    assert_eq!(summary.consistent, 1);
    assert!(summary.all_consistent());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("10.0.0.53"));
    assert!(text.contains("Looking up 127.0.0.1 diagnostics address...\n"));
    assert!(text.ends_with("Successfully ran 3 diagnostics iteration(s) with system resolver\n\n"));
}
