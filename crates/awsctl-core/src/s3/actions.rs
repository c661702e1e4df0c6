//! S3 action wrappers

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use tracing::{debug, info};

use super::params::{
    BucketParams, CreateBucketParams, ListObjectsParams, ObjectParams, PutObjectParams,
};
use super::types::{BucketSummary, ObjectContent, ObjectSummary};
use crate::error::{ActionError, ActionResult};

/// Create a bucket, applying a location constraint outside us-east-1
pub async fn create_bucket(client: &Client, params: &CreateBucketParams) -> ActionResult<String> {
    params.validate()?;
    debug!("Creating bucket '{}'", params.bucket);

    let mut request = client.create_bucket().bucket(&params.bucket);
    if let Some(region) = params.region.as_deref() {
        if region != "us-east-1" {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }
    }

    let output = request.send().await.map_err(ActionError::from_sdk)?;
    info!("Create accepted for bucket '{}'", params.bucket);
    Ok(output
        .location()
        .map(str::to_string)
        .unwrap_or_else(|| format!("/{}", params.bucket)))
}

/// Delete an empty bucket
pub async fn delete_bucket(client: &Client, params: &BucketParams) -> ActionResult<()> {
    params.validate()?;
    client
        .delete_bucket()
        .bucket(&params.bucket)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    info!("Deleted bucket '{}'", params.bucket);
    Ok(())
}

/// List every bucket owned by the caller
pub async fn list_buckets(client: &Client) -> ActionResult<Vec<BucketSummary>> {
    let output = client
        .list_buckets()
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    Ok(output
        .buckets()
        .iter()
        .map(BucketSummary::from_bucket)
        .collect())
}

/// List objects under an optional prefix, draining all pages in provider order
pub async fn list_objects(
    client: &Client,
    params: &ListObjectsParams,
) -> ActionResult<Vec<ObjectSummary>> {
    params.validate()?;
    let mut objects = Vec::new();
    let mut stream = client
        .list_objects_v2()
        .bucket(&params.bucket)
        .set_prefix(params.prefix.clone())
        .into_paginator()
        .send();
    while let Some(page) = stream.next().await {
        let page = page.map_err(ActionError::from_sdk)?;
        objects.extend(page.contents().iter().map(ObjectSummary::from_object));
    }
    Ok(objects)
}

/// Upload one object
pub async fn put_object(client: &Client, params: &PutObjectParams) -> ActionResult<()> {
    params.validate()?;
    let mut request = client
        .put_object()
        .bucket(&params.bucket)
        .key(&params.key)
        .body(ByteStream::from(params.body.clone()));
    if let Some(content_type) = &params.content_type {
        request = request.content_type(content_type);
    }
    request.send().await.map_err(ActionError::from_sdk)?;
    debug!("Put object '{}' into '{}'", params.key, params.bucket);
    Ok(())
}

/// Download one object, aggregating its body into memory
pub async fn get_object(client: &Client, params: &ObjectParams) -> ActionResult<ObjectContent> {
    params.validate()?;
    let output = client
        .get_object()
        .bucket(&params.bucket)
        .key(&params.key)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    let content_type = output.content_type().map(str::to_string);
    let data = output
        .body
        .collect()
        .await
        .map_err(|e| ActionError::Transport(format!("failed to read object body: {e}")))?;
    Ok(ObjectContent {
        key: params.key.clone(),
        content_type,
        bytes: data.into_bytes().to_vec(),
    })
}

/// Delete one object
pub async fn delete_object(client: &Client, params: &ObjectParams) -> ActionResult<()> {
    params.validate()?;
    client
        .delete_object()
        .bucket(&params.bucket)
        .key(&params.key)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    debug!("Deleted object '{}' from '{}'", params.key, params.bucket);
    Ok(())
}
