//! Tests for the HTTP client: token handling, status checking, and decoding.

use mockito::Matcher;
use plex_artwork_rs::models::VideoContainer;
use plex_artwork_rs::{Config, Error, PlexClient};

fn client_for(server: &mockito::Server, token: &str) -> PlexClient {
    PlexClient::new(Config::new(&server.url(), token)).unwrap()
}

#[tokio::test]
async fn appends_token_as_query_parameter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/playlists")
        .match_query(Matcher::UrlEncoded(
            "X-Plex-Token".into(),
            "secret-token".into(),
        ))
        .with_status(200)
        .with_body("listing")
        .create_async()
        .await;

    let client = client_for(&server, "secret-token");
    let body = client.get_raw("/playlists").await.unwrap();

    assert_eq!(body, b"listing");
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_body_is_a_valid_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/thumb/9")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server, "tok");
    let body = client.get_raw("/thumb/9").await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn non_2xx_status_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/playlists")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let client = client_for(&server, "wrong");
    let err = client.get_raw("/playlists").await.unwrap_err();
    match err {
        Error::Status { path, status } => {
            assert_eq!(path, "/playlists");
            assert_eq!(status.as_u16(), 401);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_xml_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/playlists/1/items")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("this is not xml at all <<<")
        .create_async()
        .await;

    let client = client_for(&server, "tok");
    let err = client
        .get_xml::<VideoContainer>("/playlists/1/items")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn connection_failure_is_fatal() {
    // Nothing listens here.
    let client = PlexClient::new(Config::new("http://127.0.0.1:1", "tok")).unwrap();
    let err = client.get_raw("/playlists").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}
