//! Typed DynamoDB actions
//!
//! Each action validates its parameters locally, issues exactly one logical
//! DynamoDB operation, and maps the response to a plain serializable value.
//! Every action is an `async fn`: the returned future is the pending
//! computation, and the caller decides when to await it or drop it to abandon
//! the local wait. Actions never retry; retry policy belongs to the
//! [`crate::context::AwsContext`] configuration.

mod actions;
mod item;
mod params;
mod types;

pub use actions::{
    create_table, delete_table, describe_table, get_item, list_tables, put_item, query,
    wait_for_table_active,
};
pub use item::{from_attribute_value, from_item, to_attribute_value, to_item};
pub use params::{CreateTableParams, GetItemParams, PutItemParams, QueryParams, TableParams};
pub use types::TableSummary;
