use common::requests::ItemId;
use qrhook::board::{BoardClient, MondayClient};
use qrhook::{Settings, UploadError};
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn settings_for(base: &str) -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_url: format!("{}/v2", base),
        file_api_url: format!("{}/v2/file", base),
        api_token: TOKEN.to_string(),
        board_id: "1".to_string(),
        background_path: PathBuf::from("unused.png"),
        http_timeout_secs: 5,
    }
}

fn client_for(server: &MockServer) -> MondayClient {
    MondayClient::new(&settings_for(&server.uri())).unwrap()
}

fn item_id(raw: u64) -> ItemId {
    ItemId::new(raw).unwrap()
}

fn items_body(columns: serde_json::Value) -> serde_json::Value {
    json!({ "data": { "items": [ { "id": "42", "column_values": columns } ] } })
}

#[tokio::test]
async fn lookup_returns_text_of_the_requested_column() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("authorization", TOKEN))
        .and(body_partial_json(json!({ "variables": { "itemId": ["42"] } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([
            { "id": "text_other", "text": "https://wrong.example" },
            { "id": "text_mkspdyty", "text": "https://right.example/guide" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let url = client_for(&server).lookup(item_id(42), "text_mkspdyty").await;
    assert_eq!(url.as_deref(), Some("https://right.example/guide"));
}

#[tokio::test]
async fn lookup_treats_empty_text_as_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_body(json!([
            { "id": "text_mkspdyty", "text": "" }
        ]))))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).lookup(item_id(42), "text_mkspdyty").await, None);
}

#[tokio::test]
async fn lookup_without_items_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "items": [] } })))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).lookup(item_id(42), "text_mkspdyty").await, None);
}

#[tokio::test]
async fn lookup_collapses_http_failures_into_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).lookup(item_id(42), "text_mkspdyty").await, None);
}

#[tokio::test]
async fn lookup_collapses_unreadable_bodies_into_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).lookup(item_id(42), "text_mkspdyty").await, None);
}

#[tokio::test]
async fn lookup_collapses_transport_errors_into_absent() {
    // nothing listens on the discard port
    let client = MondayClient::new(&settings_for("http://127.0.0.1:9")).unwrap();
    assert_eq!(client.lookup(item_id(42), "text_mkspdyty").await, None);
}

#[tokio::test]
async fn upload_sends_the_multipart_mutation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .and(header("authorization", TOKEN))
        .and(body_string_contains(
            r#"add_file_to_column (item_id: 42, column_id: "file_mksww9yh", file: $file)"#,
        ))
        .and(body_string_contains(r#"{"image":"variables.file"}"#))
        .and(body_string_contains(r#"name="image"; filename="qr_code.png""#))
        .and(body_string_contains("fake-png-bytes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "add_file_to_column": { "id": "99" } } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .upload(item_id(42), "file_mksww9yh", b"fake-png-bytes".to_vec())
        .await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn upload_with_graphql_errors_fails_despite_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [ { "message": "Column not found" } ]
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .upload(item_id(42), "file_mksww9yh", b"png".to_vec())
        .await;
    match result {
        Err(UploadError::Rejected(errors)) => assert!(errors.contains("Column not found")),
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn upload_with_error_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Not Authenticated"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .upload(item_id(42), "file_mksww9yh", b"png".to_vec())
        .await;
    match result {
        Err(UploadError::Status { code, body }) => {
            assert_eq!(code, 401);
            assert_eq!(body, "Not Authenticated");
        }
        other => panic!("expected a status failure, got {:?}", other),
    }
}

#[tokio::test]
async fn upload_with_unreadable_body_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .upload(item_id(42), "file_mksww9yh", b"png".to_vec())
        .await;
    assert!(matches!(result, Err(UploadError::Decode(_))));
}
