//! S3 action tests against a stubbed HTTP endpoint

use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use awsctl_core::s3::{
    create_bucket, get_object, list_buckets, put_object, CreateBucketParams, ObjectParams,
    PutObjectParams,
};

fn stub_client(endpoint: &str) -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::Config::builder()
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
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

fn xml_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/xml")
}

#[tokio::test]
async fn list_buckets_maps_names_and_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(xml_response(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult>
  <Owner><ID>owner-1</ID></Owner>
  <Buckets>
    <Bucket><Name>demo-bucket</Name><CreationDate>2024-03-01T12:00:00.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#,
        ))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let buckets = list_buckets(&client).await.unwrap();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name.as_deref(), Some("demo-bucket"));
    assert_eq!(
        buckets[0].created_at.as_deref(),
        Some("2024-03-01T12:00:00Z")
    );
}

#[tokio::test]
async fn create_bucket_maps_already_owned_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(xml_response(
            409,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>BucketAlreadyOwnedByYou</Code>
  <Message>Your previous request to create the named bucket succeeded and you already own it.</Message>
</Error>"#,
        ))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let err = create_bucket(
        &client,
        &CreateBucketParams::new("demo-bucket", Some("us-east-1".to_string())),
    )
    .await
    .unwrap_err();
    assert!(err.is_already_exists(), "got {err:?}");
}

#[tokio::test]
async fn get_object_maps_no_such_key_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(xml_response(
            404,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>NoSuchKey</Code>
  <Message>The specified key does not exist.</Message>
</Error>"#,
        ))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let err = get_object(&client, &ObjectParams::new("demo-bucket", "ghost.txt"))
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn get_object_aggregates_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("hello from the stub", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    let content = get_object(&client, &ObjectParams::new("demo-bucket", "hello.txt"))
        .await
        .unwrap();
    assert_eq!(content.key, "hello.txt");
    assert_eq!(content.as_text(), Some("hello from the stub"));
    assert_eq!(content.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn invalid_params_never_reach_the_network() {
    let server = MockServer::start().await;
    let client = stub_client(&server.uri());

    let err = create_bucket(&client, &CreateBucketParams::new("Bad_Bucket", None))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = put_object(
        &client,
        &PutObjectParams::new("demo-bucket", "", b"body".to_vec()),
    )
    .await
    .unwrap_err();
    assert!(err.is_validation());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn put_object_sends_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());
    put_object(
        &client,
        &PutObjectParams::new("demo-bucket", "hello.txt", b"hi".to_vec())
            .with_content_type("text/plain"),
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, b"hi".to_vec());
    assert!(requests[0].url.path().contains("demo-bucket"));
    assert!(requests[0].url.path().contains("hello.txt"));
}
