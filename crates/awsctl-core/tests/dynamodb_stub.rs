//! DynamoDB action tests against a stubbed HTTP endpoint
//!
//! The client is pointed at a local wiremock server with static test
//! credentials, so these tests exercise the full request build / response
//! map / error classification path without touching the network proper.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aws_sdk_dynamodb::config::retry::RetryConfig;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use awsctl_core::dynamodb::{
    create_table, get_item, list_tables, put_item, query, wait_for_table_active,
    CreateTableParams, GetItemParams, PutItemParams, QueryParams,
};
use awsctl_core::ProgressEvent;

const DDB_JSON: &str = "application/x-amz-json-1.0";

fn stub_client(endpoint: &str) -> aws_sdk_dynamodb::Client {
    let config = aws_sdk_dynamodb::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "test-access-key",
            "test-secret-key",
            None,
            None,
            "static",
        ))
        .endpoint_url(endpoint)
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_dynamodb::Client::from_conf(config)
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, DDB_JSON)
}

fn error_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, DDB_JSON)
}

#[tokio::test]
async fn list_tables_drains_every_page_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(json_response(
            r#"{"TableNames":["alpha","beta"],"LastEvaluatedTableName":"beta"}"#,
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(json_response(r#"{"TableNames":["gamma"]}"#))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let names = list_tables(&client).await.unwrap();
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn query_drains_every_page_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(json_response(
            r#"{"Items":[{"id":{"S":"a"}}],"LastEvaluatedKey":{"id":{"S":"a"}}}"#,
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(json_response(r#"{"Items":[{"id":{"S":"b"}}]}"#))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let items = query(&client, &QueryParams::new("movies", "id", "a"))
        .await
        .unwrap();
    assert_eq!(items, vec![json!({"id": "a"}), json!({"id": "b"})]);
}

#[tokio::test]
async fn create_table_maps_already_exists_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response(
            400,
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceInUseException","message":"Table already exists: movies"}"#,
        ))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let err = create_table(&client, &CreateTableParams::new("movies", "id"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists(), "got {err:?}");
    assert!(err.to_string().contains("ResourceInUseException"));
}

#[tokio::test]
async fn get_item_maps_not_found_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response(
            400,
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
        ))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let err = get_item(
        &client,
        &GetItemParams::new("movies", json!({"id": "movie-001"})),
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn invalid_params_never_reach_the_network() {
    let server = MockServer::start().await;
    let client = stub_client(&server.uri());

    // Table name shorter than the service minimum.
    let err = create_table(&client, &CreateTableParams::new("x", "id"))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    // Item that is not an object.
    let err = put_item(&client, &PutItemParams::new("movies", json!("scalar")))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests.is_empty(),
        "validation failures must not issue requests, saw {}",
        requests.len()
    );
}

#[tokio::test]
async fn put_item_sends_supplied_fields_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(json_response("{}"))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    put_item(
        &client,
        &PutItemParams::new(
            "movies",
            json!({"id": "movie-001", "year": 1993, "watched": true}),
        ),
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["TableName"], "movies");
    assert_eq!(body["Item"]["id"]["S"], "movie-001");
    assert_eq!(body["Item"]["year"]["N"], "1993");
    assert_eq!(body["Item"]["watched"]["BOOL"], true);
}

#[tokio::test]
async fn get_item_maps_present_and_absent_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(json_response(
            r#"{"Item":{"id":{"S":"movie-001"},"year":{"N":"1993"}}}"#,
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(json_response("{}"))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let params = GetItemParams::new("movies", json!({"id": "movie-001"}));

    let found = get_item(&client, &params).await.unwrap();
    assert_eq!(found, Some(json!({"id": "movie-001", "year": 1993})));

    let missing = get_item(&client, &params).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn wait_polls_until_table_is_active() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(json_response(
            r#"{"Table":{"TableName":"movies","TableStatus":"CREATING"}}"#,
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(json_response(
            r#"{"Table":{"TableName":"movies","TableStatus":"ACTIVE"}}"#,
        ))
        .mount(&server)
        .await;

    let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let callback = Box::new(move |event: ProgressEvent| {
        let tag = match event {
            ProgressEvent::Started { .. } => "started".to_string(),
            ProgressEvent::Polling { status, .. } => format!("polling:{status}"),
            ProgressEvent::Completed { .. } => "completed".to_string(),
            ProgressEvent::TimedOut { .. } => "timed-out".to_string(),
        };
        sink.lock().unwrap().push(tag);
    });

    let client = stub_client(&server.uri());
    let summary = wait_for_table_active(
        &client,
        "movies",
        Duration::from_secs(30),
        Duration::from_millis(10),
        Some(callback),
    )
    .await
    .unwrap();

    assert_eq!(summary.status.as_deref(), Some("ACTIVE"));
    assert_eq!(
        events.lock().unwrap().as_slice(),
        ["started", "polling:CREATING", "completed"]
    );
}

#[tokio::test]
async fn connection_failures_map_to_transport() {
    // Grab a port that stops listening as soon as the server drops.
    let dead_endpoint = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = stub_client(&dead_endpoint);
    let err = list_tables(&client).await.unwrap_err();
    assert!(err.is_retryable(), "got {err:?}");
    assert_eq!(err.category(), "transport");
}
