//! Typed S3 actions
//!
//! Same contract as [`crate::dynamodb`]: validate locally, issue one logical
//! operation, map the response to a plain value, and route every failure
//! through [`crate::error::ActionError::from_sdk`].

mod actions;
mod params;
mod types;

pub use actions::{
    create_bucket, delete_bucket, delete_object, get_object, list_buckets, list_objects,
    put_object,
};
pub use params::{BucketParams, CreateBucketParams, ListObjectsParams, ObjectParams, PutObjectParams};
pub use types::{BucketSummary, ObjectContent, ObjectSummary};
