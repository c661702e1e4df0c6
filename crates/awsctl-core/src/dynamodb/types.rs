//! Simplified result values mapped from DynamoDB responses

use aws_sdk_dynamodb::types::TableDescription;
use serde::Serialize;

use crate::present;

/// Flattened view of a table, carrying only what the tool presents
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableSummary {
    pub name: Option<String>,
    pub status: Option<String>,
    pub arn: Option<String>,
    pub item_count: Option<i64>,
    pub created_at: Option<String>,
}

impl TableSummary {
    pub(crate) fn from_description(desc: &TableDescription) -> Self {
        Self {
            name: desc.table_name().map(str::to_string),
            status: desc.table_status().map(|s| s.as_str().to_string()),
            arn: desc.table_arn().map(str::to_string),
            item_count: desc.item_count(),
            created_at: desc.creation_date_time().and_then(present::rfc3339),
        }
    }
}
