//! Full cascade test against the live mock server.
//!
//! # Design
//! Starts the fixture server on a random port, then drives every
//! classification arm over real HTTP through `ReqwestTransport`: both
//! success statuses, each mapped error status, an off-taxonomy status, an
//! empty success body and a non-JSON success body.

use std::collections::HashMap;

use net_core::{Endpoint, HttpMethod, NetworkError, NetworkManager, ReqwestTransport};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
struct User {
    id: Uuid,
    name: String,
}

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn full_classification_cascade_over_real_http() {
    let base = start_server().await;
    let sut = NetworkManager::new(ReqwestTransport::new());

    // Empty store lists as an empty array (200 arm).
    let list = Endpoint::new(&format!("{base}/users"), HttpMethod::Get);
    let users: Vec<User> = sut.execute(&list).await.unwrap();
    assert!(users.is_empty());

    // Creation answers 201 with the minted user.
    let create = Endpoint::with_headers(
        &format!("{base}/users"),
        HttpMethod::Post,
        HashMap::from([("accept".to_string(), "application/json".to_string())]),
    );
    let created: User = sut.execute(&create).await.unwrap();
    assert_eq!(created.name, "Dummy");

    // Fetching it back yields an equal value.
    let get = Endpoint::new(&format!("{base}/users/{}", created.id), HttpMethod::Get);
    let fetched: User = sut.execute(&get).await.unwrap();
    assert_eq!(fetched, created);

    // 401 and 500 map to their dedicated kinds.
    let unauthorized = Endpoint::new(&format!("{base}/unauthorized"), HttpMethod::Get);
    let err = sut.execute::<User>(&unauthorized).await.unwrap_err();
    assert_eq!(err, NetworkError::Unauthorized);

    let server_error = Endpoint::new(&format!("{base}/error"), HttpMethod::Get);
    let err = sut.execute::<User>(&server_error).await.unwrap_err();
    assert_eq!(err, NetworkError::InternalServerError);

    // Statuses outside the taxonomy, 404 and 418 alike, collapse together.
    let missing = Endpoint::new(&format!("{base}/users/{}", Uuid::nil()), HttpMethod::Get);
    let err = sut.execute::<User>(&missing).await.unwrap_err();
    assert_eq!(err, NetworkError::UnknownStatusCode);

    let teapot = Endpoint::new(&format!("{base}/teapot"), HttpMethod::Get);
    let err = sut.execute::<User>(&teapot).await.unwrap_err();
    assert_eq!(err, NetworkError::UnknownStatusCode);

    // A success status with no body is a backend error.
    let empty = Endpoint::new(&format!("{base}/empty"), HttpMethod::Get);
    let err = sut.execute::<User>(&empty).await.unwrap_err();
    assert_eq!(err, NetworkError::BackendError);

    // A success status with a non-JSON body is a parsing error.
    let garbled = Endpoint::new(&format!("{base}/garbled"), HttpMethod::Get);
    let err = sut.execute::<User>(&garbled).await.unwrap_err();
    assert_eq!(err, NetworkError::ParsingError);
}

#[tokio::test]
async fn connection_refused_yields_unknown_response() {
    // Bind then drop a listener so the port is very likely unoccupied.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sut = NetworkManager::new(ReqwestTransport::new());
    let unreachable = Endpoint::new(&format!("http://{addr}/users"), HttpMethod::Get);
    let err = sut.execute::<User>(&unreachable).await.unwrap_err();
    assert_eq!(err, NetworkError::UnknownResponse);
}
