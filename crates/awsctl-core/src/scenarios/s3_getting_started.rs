//! S3 getting-started scenario
//!
//! State inputs: `bucket_name`, `object_key`, `content`. Optional:
//! `keep_bucket`.

use async_trait::async_trait;

use crate::context::AwsContext;
use crate::error::ActionResult;
use crate::present;
use crate::s3::{
    self, BucketParams, CreateBucketParams, ListObjectsParams, ObjectParams, PutObjectParams,
};
use crate::scenario::{Scenario, ScenarioState, Step, StepOutput};

pub(super) fn build() -> Scenario {
    Scenario::new(
        "s3-getting-started",
        "Create a bucket, upload an object, list and download it, then clean up",
    )
    .step(CreateBucket)
    .step(PutObject)
    .step(ListObjects)
    .step(GetObject)
    .step(DeleteObject)
    .step(DeleteBucket)
}

struct CreateBucket;

#[async_trait]
impl Step for CreateBucket {
    fn label(&self) -> &str {
        "create bucket"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        let params = CreateBucketParams::new(&bucket, ctx.region());

        match s3::create_bucket(ctx.s3(), &params).await {
            Ok(location) => {
                state.insert("bucket_location", location.clone());
                Ok(StepOutput::new(format!("created bucket at {location}")))
            }
            // Re-running against our own leftover bucket is fine.
            Err(err) if err.is_already_exists() => Ok(StepOutput::new(format!(
                "bucket '{bucket}' already exists, continuing"
            ))),
            Err(err) => Err(err),
        }
    }
}

struct PutObject;

#[async_trait]
impl Step for PutObject {
    fn label(&self) -> &str {
        "upload object"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        let key = state.require_str("object_key")?;
        let content = state.require_str("content")?;
        let params = PutObjectParams::new(&bucket, &key, content.into_bytes())
            .with_content_type("text/plain");
        s3::put_object(ctx.s3(), &params).await?;
        Ok(StepOutput::new(format!("uploaded '{key}' to '{bucket}'")))
    }
}

struct ListObjects;

#[async_trait]
impl Step for ListObjects {
    fn label(&self) -> &str {
        "list objects"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        let params = ListObjectsParams::new(&bucket, None);
        let objects = s3::list_objects(ctx.s3(), &params).await?;
        Ok(StepOutput::new(present::object_listing(&objects)))
    }
}

struct GetObject;

#[async_trait]
impl Step for GetObject {
    fn label(&self) -> &str {
        "download object"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        let key = state.require_str("object_key")?;
        let params = ObjectParams::new(&bucket, &key);
        let content = s3::get_object(ctx.s3(), &params).await?;
        Ok(StepOutput::new(present::object_content(&content)))
    }
}

struct DeleteObject;

#[async_trait]
impl Step for DeleteObject {
    fn label(&self) -> &str {
        "delete object"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        let key = state.require_str("object_key")?;
        if state.get_bool("keep_bucket") {
            return Ok(StepOutput::new(format!(
                "keeping object '{key}' (cleanup skipped)"
            )));
        }
        let params = ObjectParams::new(&bucket, &key);
        s3::delete_object(ctx.s3(), &params).await?;
        Ok(StepOutput::new(format!("deleted '{key}' from '{bucket}'")))
    }
}

struct DeleteBucket;

#[async_trait]
impl Step for DeleteBucket {
    fn label(&self) -> &str {
        "delete bucket"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let bucket = state.require_str("bucket_name")?;
        if state.get_bool("keep_bucket") {
            return Ok(StepOutput::new(format!(
                "keeping bucket '{bucket}' (cleanup skipped)"
            )));
        }
        let params = BucketParams::new(&bucket);
        s3::delete_bucket(ctx.s3(), &params).await?;
        Ok(StepOutput::new(format!("deleted bucket '{bucket}'")))
    }
}
