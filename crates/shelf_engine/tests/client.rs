use std::time::Duration;

use pretty_assertions::assert_eq;
use shelf_core::MovieRecord;
use shelf_engine::{ClientSettings, FailureKind, LibraryClient, ReqwestLibraryClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DUNE: &str = r#"{"ID":1,"CreatedAt":"t","UpdatedAt":"t","DeletedAt":null,"Title":"Dune","Year":2021,"Cover":"dune.jpg"}"#;
const HEAT: &str = r#"{"ID":2,"CreatedAt":"2024-01-01T10:00:00Z","UpdatedAt":"2024-01-01T10:00:00Z","DeletedAt":null,"Title":"Heat","Year":1995,"Cover":""}"#;

fn client_for(server: &MockServer) -> ReqwestLibraryClient {
    ReqwestLibraryClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

fn json(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

#[tokio::test]
async fn library_is_returned_in_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(json(format!("[{HEAT},{DUNE}]")))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server).fetch_library().await.expect("library");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 2);
    assert_eq!(records[0].cover_url(), None);
    assert_eq!(
        records[1],
        MovieRecord {
            id: 1,
            created_at: "t".to_string(),
            updated_at: "t".to_string(),
            deleted_at: None,
            title: "Dune".to_string(),
            year: 2021,
            cover: Some("dune.jpg".to_string()),
        }
    );
}

#[tokio::test]
async fn empty_library_decodes_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(json("[]".to_string()))
        .mount(&server)
        .await;

    let records = client_for(&server).fetch_library().await.expect("library");
    assert!(records.is_empty());
}

#[tokio::test]
async fn server_error_envelope_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_raw(r#"{"error":"Setup app first"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_library().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "Setup app first");
    assert_eq!(err.to_string(), "Setup app first");
}

#[tokio::test]
async fn bare_status_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_library().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(json(r#"[{"ID":"one"}"#.to_string()))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_library().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn refresh_posts_and_returns_replacement() {
    let server = MockServer::start().await;
    let refreshed = DUNE.replace("dune.jpg", "dune2.jpg");
    Mock::given(method("POST"))
        .and(path("/api/movies/1/refresh"))
        .respond_with(json(refreshed))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server).refresh_movie(1).await.expect("refresh");
    assert_eq!(record.id, 1);
    assert_eq!(record.cover.as_deref(), Some("dune2.jpg"));
}

#[tokio::test]
async fn refresh_of_missing_movie_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/movies/99/refresh"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"error":"Movie not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).refresh_movie(99).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.message, "Movie not found");
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/movies/1/refresh"))
        .respond_with(json(DUNE.to_string()).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let client = ReqwestLibraryClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.refresh_movie(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/library"))
        .respond_with(json(format!("[{DUNE}]")))
        .mount(&server)
        .await;

    let client = ReqwestLibraryClient::new(ClientSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.fetch_library().await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let uri = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let client = ReqwestLibraryClient::new(ClientSettings {
        base_url: uri,
        connect_timeout: Duration::from_secs(2),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.fetch_library().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[test]
fn invalid_base_url_is_rejected_up_front() {
    let err = ReqwestLibraryClient::new(ClientSettings {
        base_url: "localhost without scheme".to_string(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
