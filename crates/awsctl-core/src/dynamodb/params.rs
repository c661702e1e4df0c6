//! Typed parameters for DynamoDB actions
//!
//! Parameters are validated locally before any request is dispatched, so bad
//! input never costs a network round-trip.

use serde_json::Value;

use crate::error::{ActionError, ActionResult};

/// Check a DynamoDB table name against the service's documented rules:
/// 3-255 characters from `a-z A-Z 0-9 _ - .`
pub(crate) fn validate_table_name(name: &str) -> ActionResult<()> {
    if name.len() < 3 || name.len() > 255 {
        return Err(ActionError::validation(format!(
            "table name '{name}' must be between 3 and 255 characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(ActionError::validation(format!(
            "table name '{name}' may only contain letters, digits, '_', '-', and '.'"
        )));
    }
    Ok(())
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> ActionResult<()> {
    if value.trim().is_empty() {
        return Err(ActionError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Parameters for table-scoped calls (describe, delete)
#[derive(Debug, Clone)]
pub struct TableParams {
    pub table_name: String,
}

impl TableParams {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_table_name(&self.table_name)
    }
}

/// Parameters for creating a table with a simple primary key
#[derive(Debug, Clone)]
pub struct CreateTableParams {
    pub table_name: String,
    /// Partition (hash) key attribute name; string-typed
    pub partition_key: String,
    /// Optional sort (range) key attribute name; string-typed
    pub sort_key: Option<String>,
}

impl CreateTableParams {
    pub fn new(table_name: impl Into<String>, partition_key: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: partition_key.into(),
            sort_key: None,
        }
    }

    pub fn with_sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.sort_key = Some(sort_key.into());
        self
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_table_name(&self.table_name)?;
        require_non_empty("partition key", &self.partition_key)?;
        if let Some(sort_key) = &self.sort_key {
            require_non_empty("sort key", sort_key)?;
            if sort_key == &self.partition_key {
                return Err(ActionError::validation(
                    "sort key must differ from the partition key",
                ));
            }
        }
        Ok(())
    }
}

/// Parameters for writing one item
#[derive(Debug, Clone)]
pub struct PutItemParams {
    pub table_name: String,
    /// The item as a JSON object; converted attribute-by-attribute
    pub item: Value,
}

impl PutItemParams {
    pub fn new(table_name: impl Into<String>, item: Value) -> Self {
        Self {
            table_name: table_name.into(),
            item,
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_table_name(&self.table_name)?;
        if !self.item.is_object() {
            return Err(ActionError::validation("item must be a JSON object"));
        }
        Ok(())
    }
}

/// Parameters for reading one item by its full key
#[derive(Debug, Clone)]
pub struct GetItemParams {
    pub table_name: String,
    /// The primary key as a JSON object, e.g. `{"id": "movie-001"}`
    pub key: Value,
}

impl GetItemParams {
    pub fn new(table_name: impl Into<String>, key: Value) -> Self {
        Self {
            table_name: table_name.into(),
            key,
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_table_name(&self.table_name)?;
        match &self.key {
            Value::Object(map) if !map.is_empty() => Ok(()),
            _ => Err(ActionError::validation(
                "key must be a non-empty JSON object",
            )),
        }
    }
}

/// Parameters for querying by partition key equality
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub table_name: String,
    pub key_name: String,
    pub key_value: String,
}

impl QueryParams {
    pub fn new(
        table_name: impl Into<String>,
        key_name: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            key_name: key_name.into(),
            key_value: key_value.into(),
        }
    }

    pub fn validate(&self) -> ActionResult<()> {
        validate_table_name(&self.table_name)?;
        require_non_empty("key name", &self.key_name)?;
        require_non_empty("key value", &self.key_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_name_rules() {
        assert!(validate_table_name("movies").is_ok());
        assert!(validate_table_name("a.b-c_9").is_ok());
        assert!(validate_table_name("ab").is_err());
        assert!(validate_table_name("has space").is_err());
        assert!(validate_table_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn create_table_rejects_duplicate_keys() {
        let params = CreateTableParams::new("movies", "id").with_sort_key("id");
        assert!(params.validate().unwrap_err().is_validation());
    }

    #[test]
    fn create_table_accepts_sort_key() {
        let params = CreateTableParams::new("movies", "id").with_sort_key("year");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn get_item_requires_object_key() {
        let params = GetItemParams::new("movies", json!("movie-001"));
        assert!(params.validate().unwrap_err().is_validation());

        let params = GetItemParams::new("movies", json!({}));
        assert!(params.validate().unwrap_err().is_validation());

        let params = GetItemParams::new("movies", json!({"id": "movie-001"}));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn query_requires_key_parts() {
        assert!(QueryParams::new("movies", "", "v").validate().is_err());
        assert!(QueryParams::new("movies", "id", " ").validate().is_err());
        assert!(QueryParams::new("movies", "id", "v").validate().is_ok());
    }
}
