//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full list → fetch → write cycle end-to-end.

use link_harvester::config::{Config, HttpConfig};
use link_harvester::harvest::{
    build_http_client, collect_links, fetch_file, harvest, FetchOutcome,
};
use link_harvester::output::LinkStatus;
use link_harvester::{HarvestError, Harvester};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"<html><head><title>Files</title></head><body>
    <a href="/a/cat_1.csv">Cat 1</a>
    <a href="/a/dog_1.csv">Dog 1</a>
    <a name="no-href">Anchor</a>
    <a href="/a/cat_2.csv">Cat 2</a>
    </body></html>"#;

/// Mounts the listing page at /listing
async fn mount_listing(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a downloadable file
async fn mount_file(server: &MockServer, file_path: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(file_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

fn test_client() -> reqwest::Client {
    build_http_client(&HttpConfig::default()).expect("Failed to build client")
}

/// Returns a URL on a port nobody is listening on
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/file.csv", port)
}

#[tokio::test]
async fn test_collect_filters_in_document_order() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;

    let listing_url = format!("{}/listing", mock_server.uri());
    let links = collect_links(&test_client(), &listing_url, "cat", None, None)
        .await
        .expect("Collection failed");

    assert_eq!(
        links,
        vec![
            format!("{}/a/cat_1.csv", mock_server.uri()),
            format!("{}/a/cat_2.csv", mock_server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_collect_is_repeatable() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;

    let client = test_client();
    let listing_url = format!("{}/listing", mock_server.uri());
    let first = collect_links(&client, &listing_url, ".csv", None, None)
        .await
        .unwrap();
    let second = collect_links(&client, &listing_url, ".csv", None, None)
        .await
        .unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_collect_with_custom_prefix() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;

    let listing_url = format!("{}/listing", mock_server.uri());
    let links = collect_links(
        &test_client(),
        &listing_url,
        "dog",
        Some("https://mirror.example.org/files"),
        None,
    )
    .await
    .unwrap();

    assert_eq!(links, vec!["https://mirror.example.org/files/a/dog_1.csv"]);
}

#[tokio::test]
async fn test_collect_listing_http_error_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let listing_url = format!("{}/listing", mock_server.uri());
    let result = collect_links(&test_client(), &listing_url, "cat", None, None).await;

    assert!(matches!(
        result,
        Err(HarvestError::ListingStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_collect_connection_refused_is_fatal() {
    let result = collect_links(&test_client(), &refused_url(), "cat", None, None).await;
    assert!(matches!(result, Err(HarvestError::Http { .. })));
}

#[tokio::test]
async fn test_collect_listing_timeout_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let listing_url = format!("{}/listing", mock_server.uri());
    let result = collect_links(
        &test_client(),
        &listing_url,
        "cat",
        None,
        Some(Duration::from_millis(200)),
    )
    .await;

    match result {
        Err(HarvestError::Http { url, source }) => {
            assert_eq!(url, listing_url);
            assert!(source.is_timeout());
        }
        other => panic!("Expected listing timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_harvester_applies_configured_listing_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.http.listing_timeout_secs = Some(1);
    let harvester = Harvester::new(config).unwrap();

    let listing_url = format!("{}/listing", mock_server.uri());
    let result = harvester.collect(&listing_url, "cat").await;

    assert!(matches!(result, Err(HarvestError::Http { .. })));
}

#[tokio::test]
async fn test_fetch_success_returns_bytes() {
    let mock_server = MockServer::start().await;
    mount_file(&mock_server, "/data.bin", &[1, 2, 3, 255]).await;

    let url = format!("{}/data.bin", mock_server.uri());
    let outcome = fetch_file(&test_client(), &url, Duration::from_secs(10)).await;

    match outcome {
        FetchOutcome::Fetched {
            status_code, bytes, ..
        } => {
            assert_eq!(status_code, 200);
            assert_eq!(bytes, vec![1, 2, 3, 255]);
        }
        other => panic!("Expected Fetched, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_404_is_failure_outcome() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing.csv", mock_server.uri());
    let outcome = fetch_file(&test_client(), &url, Duration::from_secs(10)).await;

    assert!(matches!(
        outcome,
        FetchOutcome::HttpError {
            status_code: 404,
            ..
        }
    ));
    assert!(outcome.to_string().contains(&url));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_failure_outcome() {
    let url = refused_url();
    let outcome = fetch_file(&test_client(), &url, Duration::from_secs(10)).await;

    assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
    assert!(outcome.to_string().contains(&url));
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old.csv"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/new.csv"))
        .mount(&mock_server)
        .await;
    mount_file(&mock_server, "/new.csv", b"moved").await;

    let url = format!("{}/old.csv", mock_server.uri());
    let outcome = fetch_file(&test_client(), &url, Duration::from_secs(10)).await;

    match outcome {
        FetchOutcome::Fetched {
            final_url, bytes, ..
        } => {
            assert!(final_url.ends_with("/new.csv"));
            assert_eq!(bytes, b"moved");
        }
        other => panic!("Expected Fetched, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_timeout_is_failure_outcome() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.csv"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let url = format!("{}/slow.csv", mock_server.uri());
    let outcome = fetch_file(&test_client(), &url, Duration::from_millis(200)).await;

    assert!(matches!(outcome, FetchOutcome::NetworkError { .. }));
}

#[tokio::test]
async fn test_full_harvest_counts_and_files() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;
    mount_file(&mock_server, "/a/cat_1.csv", b"id,name\n1,tom\n").await;
    Mock::given(method("GET"))
        .and(path("/a/cat_2.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a/dog_1.csv"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let out = TempDir::new().unwrap();
    let out_dir = out.path().join("downloads");
    let listing_url = format!("{}/listing", mock_server.uri());

    let harvester = Harvester::new(Config::default()).unwrap();
    let summary = harvester
        .run(&listing_url, "cat", &out_dir)
        .await
        .expect("Harvest failed");

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), summary.total() - summary.succeeded());

    assert_eq!(
        std::fs::read(out_dir.join("cat_1.csv")).unwrap(),
        b"id,name\n1,tom\n"
    );
    assert!(!out_dir.join("cat_2.csv").exists());
    assert!(matches!(
        summary.reports[1].status,
        LinkStatus::FetchFailed(_)
    ));
}

#[tokio::test]
async fn test_harvest_into_existing_directory_overwrites() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;
    mount_file(&mock_server, "/a/cat_1.csv", b"fresh").await;
    mount_file(&mock_server, "/a/cat_2.csv", b"also fresh").await;

    let out = TempDir::new().unwrap();
    std::fs::write(out.path().join("cat_1.csv"), b"stale contents").unwrap();
    let listing_url = format!("{}/listing", mock_server.uri());

    let harvester = Harvester::new(Config::default()).unwrap();
    let summary = harvester.run(&listing_url, "cat", out.path()).await.unwrap();

    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 0);
    assert_eq!(std::fs::read(out.path().join("cat_1.csv")).unwrap(), b"fresh");
}

#[tokio::test]
async fn test_harvest_listing_failure_propagates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let out = TempDir::new().unwrap();
    let listing_url = format!("{}/listing", mock_server.uri());

    let harvester = Harvester::new(Config::default()).unwrap();
    let result = harvester.run(&listing_url, "cat", out.path()).await;

    assert!(matches!(result, Err(HarvestError::ListingStatus { .. })));
}

#[tokio::test]
async fn test_harvest_with_no_matches() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;

    let out = TempDir::new().unwrap();
    let listing_url = format!("{}/listing", mock_server.uri());

    let summary = harvest(Config::default(), &listing_url, "bird", out.path())
        .await
        .unwrap();

    assert_eq!(summary.total(), 0);
    assert_eq!(summary.failed(), 0);
}

#[tokio::test]
async fn test_harvest_skips_links_without_filename() {
    let mock_server = MockServer::start().await;
    mount_listing(
        &mock_server,
        r#"<a href="/">Home</a><a href="/files/report.txt">Report</a>"#,
    )
    .await;
    mount_file(&mock_server, "/files/report.txt", b"report").await;

    let out = TempDir::new().unwrap();
    let listing_url = format!("{}/listing", mock_server.uri());

    let harvester = Harvester::new(Config::default()).unwrap();
    let summary = harvester.run(&listing_url, "/", out.path()).await.unwrap();

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.succeeded(), 1);
    assert!(matches!(
        summary.reports[0].status,
        LinkStatus::InvalidFilename(_)
    ));
    assert_eq!(summary.reports[1].filename.as_deref(), Some("report.txt"));
}

#[tokio::test]
async fn test_harvest_write_failure_not_counted() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, r#"<a href="/a/blocked.csv">Blocked</a>"#).await;
    mount_file(&mock_server, "/a/blocked.csv", b"data").await;

    let out = TempDir::new().unwrap();
    // A directory where the file should go makes the write fail
    std::fs::create_dir(out.path().join("blocked.csv")).unwrap();
    let listing_url = format!("{}/listing", mock_server.uri());

    let harvester = Harvester::new(Config::default()).unwrap();
    let summary = harvester.run(&listing_url, "blocked", out.path()).await.unwrap();

    assert_eq!(summary.total(), 1);
    assert_eq!(summary.succeeded(), 0);
    assert!(matches!(
        summary.reports[0].status,
        LinkStatus::WriteFailed(_)
    ));
}

#[tokio::test]
async fn test_plan_downloads_nothing() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, LISTING).await;
    Mock::given(method("GET"))
        .and(path("/a/cat_1.csv"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let listing_url = format!("{}/listing", mock_server.uri());
    let harvester = Harvester::new(Config::default()).unwrap();
    let planned = harvester.plan(&listing_url, "cat").await.unwrap();

    let names: Vec<_> = planned
        .iter()
        .map(|p| p.filename.as_ref().unwrap().as_str())
        .collect();
    assert_eq!(names, vec!["cat_1.csv", "cat_2.csv"]);
}
