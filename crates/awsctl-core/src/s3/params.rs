//! Typed parameters for S3 actions

use crate::error::{ActionError, ActionResult};

/// Check a bucket name against the subset of naming rules that are pure
/// syntax: 3-63 characters, lowercase letters, digits, hyphens and dots,
/// starting and ending alphanumeric.
pub(crate) fn validate_bucket_name(name: &str) -> ActionResult<()> {
    if name.len() < 3 || name.len() > 63 {
        return Err(ActionError::validation(format!(
            "bucket name '{name}' must be between 3 and 63 characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.'))
    {
        return Err(ActionError::validation(format!(
            "bucket name '{name}' may only contain lowercase letters, digits, '-', and '.'"
        )));
    }
    let first = name.chars().next().unwrap_or(' ');
    let last = name.chars().last().unwrap_or(' ');
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err(ActionError::validation(format!(
            "bucket name '{name}' must start and end with a letter or digit"
        )));
    }
    if name.contains("..") {
        return Err(ActionError::validation(format!(
            "bucket name '{name}' must not contain consecutive dots"
        )));
    }
    Ok(())
}

pub(crate) fn validate_object_key(key: &str) -> ActionResult<()> {
    if key.is_empty() {
        return Err(ActionError::validation("object key must not be empty"));
    }
    if key.len() > 1024 {
        return Err(ActionError::validation(
            "object key must not exceed 1024 bytes",
        ));
    }
    Ok(())
}

/// Parameters for bucket-scoped calls (delete, head)
#[derive(Debug, Clone)]
pub struct BucketParams {
    pub bucket: String,
}

impl BucketParams {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_bucket_name(&self.bucket)
    }
}

/// Parameters for creating a bucket
#[derive(Debug, Clone)]
pub struct CreateBucketParams {
    pub bucket: String,
    /// Region the bucket should live in; needed for the location constraint
    /// everywhere except us-east-1
    pub region: Option<String>,
}

impl CreateBucketParams {
    pub fn new(bucket: impl Into<String>, region: Option<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region,
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_bucket_name(&self.bucket)
    }
}

/// Parameters for object-scoped calls (get, delete)
#[derive(Debug, Clone)]
pub struct ObjectParams {
    pub bucket: String,
    pub key: String,
}

impl ObjectParams {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_bucket_name(&self.bucket)?;
        validate_object_key(&self.key)
    }
}

/// Parameters for writing one object
#[derive(Debug, Clone)]
pub struct PutObjectParams {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl PutObjectParams {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            body,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_bucket_name(&self.bucket)?;
        validate_object_key(&self.key)
    }
}

/// Parameters for listing objects, optionally under a prefix
#[derive(Debug, Clone)]
pub struct ListObjectsParams {
    pub bucket: String,
    pub prefix: Option<String>,
}

impl ListObjectsParams {
    pub fn new(bucket: impl Into<String>, prefix: Option<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix,
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_bucket_name(&self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_name_rules() {
        assert!(validate_bucket_name("my-demo-bucket").is_ok());
        assert!(validate_bucket_name("logs.example.com").is_ok());
        assert!(validate_bucket_name("ab").is_err());
        assert!(validate_bucket_name("MyBucket").is_err());
        assert!(validate_bucket_name("-leading").is_err());
        assert!(validate_bucket_name("trailing-").is_err());
        assert!(validate_bucket_name("double..dot").is_err());
        assert!(validate_bucket_name(&"x".repeat(64)).is_err());
    }

    #[test]
    fn object_key_rules() {
        assert!(validate_object_key("hello.txt").is_ok());
        assert!(validate_object_key("").is_err());
        assert!(validate_object_key(&"k".repeat(1025)).is_err());
    }

    #[test]
    fn put_object_builder_sets_content_type() {
        let params = PutObjectParams::new("my-bucket", "hello.txt", b"hi".to_vec())
            .with_content_type("text/plain");
        assert_eq!(params.content_type.as_deref(), Some("text/plain"));
        assert!(params.validate().is_ok());
    }
}
