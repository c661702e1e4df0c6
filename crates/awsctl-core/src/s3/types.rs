//! Simplified result values mapped from S3 responses

use aws_sdk_s3::types::{Bucket, Object};
use serde::Serialize;

use crate::present;

/// Flattened view of a bucket
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BucketSummary {
    pub name: Option<String>,
    pub created_at: Option<String>,
}

impl BucketSummary {
    pub(crate) fn from_bucket(bucket: &Bucket) -> Self {
        Self {
            name: bucket.name().map(str::to_string),
            created_at: bucket.creation_date().and_then(present::rfc3339),
        }
    }
}

/// Flattened view of one listed object
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObjectSummary {
    pub key: Option<String>,
    pub size: Option<i64>,
    pub last_modified: Option<String>,
    pub storage_class: Option<String>,
}

impl ObjectSummary {
    pub(crate) fn from_object(object: &Object) -> Self {
        Self {
            key: object.key().map(str::to_string),
            size: object.size(),
            last_modified: object.last_modified().and_then(present::rfc3339),
            storage_class: object.storage_class().map(|c| c.as_str().to_string()),
        }
    }
}

/// A downloaded object with its aggregated bytes
#[derive(Debug, Clone)]
pub struct ObjectContent {
    pub key: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ObjectContent {
    /// Size of the downloaded body in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Body as UTF-8 text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
