//! DynamoDB action wrappers

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info};

use super::item::{from_item, to_attribute_value, to_item};
use super::params::{CreateTableParams, GetItemParams, PutItemParams, QueryParams, TableParams};
use super::types::TableSummary;
use crate::error::{ActionError, ActionResult};
use crate::progress::{emit, ProgressCallback, ProgressEvent};

fn build_err(e: impl std::fmt::Display) -> ActionError {
    ActionError::Unknown(format!("failed to build request: {e}"))
}

/// Create a table with a string partition key (and optional string sort key),
/// billed on demand. Returns the table as reported by the service; the table
/// is usually still in `CREATING` state at that point.
pub async fn create_table(client: &Client, params: &CreateTableParams) -> ActionResult<TableSummary> {
    params.validate()?;
    debug!("Creating table '{}'", params.table_name);

    let mut attribute_definitions = vec![AttributeDefinition::builder()
        .attribute_name(&params.partition_key)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(build_err)?];
    let mut key_schema = vec![KeySchemaElement::builder()
        .attribute_name(&params.partition_key)
        .key_type(KeyType::Hash)
        .build()
        .map_err(build_err)?];

    if let Some(sort_key) = &params.sort_key {
        attribute_definitions.push(
            AttributeDefinition::builder()
                .attribute_name(sort_key)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(build_err)?,
        );
        key_schema.push(
            KeySchemaElement::builder()
                .attribute_name(sort_key)
                .key_type(KeyType::Range)
                .build()
                .map_err(build_err)?,
        );
    }

    let output = client
        .create_table()
        .table_name(&params.table_name)
        .set_attribute_definitions(Some(attribute_definitions))
        .set_key_schema(Some(key_schema))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;

    let desc = output
        .table_description()
        .ok_or_else(|| ActionError::Unknown("response carried no table description".into()))?;
    info!("Create accepted for table '{}'", params.table_name);
    Ok(TableSummary::from_description(desc))
}

/// Describe one table
pub async fn describe_table(client: &Client, params: &TableParams) -> ActionResult<TableSummary> {
    params.validate()?;
    let output = client
        .describe_table()
        .table_name(&params.table_name)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    let desc = output
        .table()
        .ok_or_else(|| ActionError::Unknown("response carried no table description".into()))?;
    Ok(TableSummary::from_description(desc))
}

/// Delete one table
pub async fn delete_table(client: &Client, params: &TableParams) -> ActionResult<()> {
    params.validate()?;
    client
        .delete_table()
        .table_name(&params.table_name)
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    info!("Delete accepted for table '{}'", params.table_name);
    Ok(())
}

/// Poll a table until it reports `ACTIVE`.
///
/// One logical operation that issues several describes under the hood. Gives
/// up with a transport error once `timeout` has elapsed; the table keeps
/// whatever state it had server-side.
pub async fn wait_for_table_active(
    client: &Client,
    table_name: &str,
    timeout: Duration,
    interval: Duration,
    on_progress: Option<ProgressCallback>,
) -> ActionResult<TableSummary> {
    let params = TableParams::new(table_name);
    params.validate()?;
    emit(
        &on_progress,
        ProgressEvent::Started {
            resource: table_name.to_string(),
        },
    );

    let started = Instant::now();
    loop {
        let output = client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(ActionError::from_sdk)?;
        let desc = output
            .table()
            .ok_or_else(|| ActionError::Unknown("response carried no table description".into()))?;

        if desc.table_status() == Some(&TableStatus::Active) {
            emit(
                &on_progress,
                ProgressEvent::Completed {
                    resource: table_name.to_string(),
                },
            );
            return Ok(TableSummary::from_description(desc));
        }

        let status = desc
            .table_status()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        emit(
            &on_progress,
            ProgressEvent::Polling {
                resource: table_name.to_string(),
                status,
            },
        );

        if started.elapsed() >= timeout {
            emit(
                &on_progress,
                ProgressEvent::TimedOut {
                    resource: table_name.to_string(),
                },
            );
            return Err(ActionError::Transport(format!(
                "timed out after {}s waiting for table '{}' to become active",
                timeout.as_secs(),
                table_name
            )));
        }
        tokio::time::sleep(interval).await;
    }
}

/// Write one item, converted attribute-by-attribute from JSON
pub async fn put_item(client: &Client, params: &PutItemParams) -> ActionResult<()> {
    params.validate()?;
    let item = to_item(&params.item)?;
    client
        .put_item()
        .table_name(&params.table_name)
        .set_item(Some(item))
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    debug!("Put item into '{}'", params.table_name);
    Ok(())
}

/// Read one item by its full primary key; `None` when absent
pub async fn get_item(client: &Client, params: &GetItemParams) -> ActionResult<Option<Value>> {
    params.validate()?;
    let key = to_item(&params.key)?;
    let output = client
        .get_item()
        .table_name(&params.table_name)
        .set_key(Some(key))
        .send()
        .await
        .map_err(ActionError::from_sdk)?;
    Ok(output.item().map(from_item))
}

/// Query by partition-key equality, draining every page in provider order
pub async fn query(client: &Client, params: &QueryParams) -> ActionResult<Vec<Value>> {
    params.validate()?;
    let mut items = Vec::new();
    let mut stream = client
        .query()
        .table_name(&params.table_name)
        .key_condition_expression("#pk = :value")
        .expression_attribute_names("#pk", &params.key_name)
        .expression_attribute_values(":value", to_attribute_value(&Value::String(params.key_value.clone()))?)
        .into_paginator()
        .items()
        .send();
    while let Some(item) = stream.next().await {
        let item = item.map_err(ActionError::from_sdk)?;
        items.push(from_item(&item));
    }
    Ok(items)
}

/// List every table name, draining all pages in provider order
pub async fn list_tables(client: &Client) -> ActionResult<Vec<String>> {
    let mut names = Vec::new();
    let mut stream = client.list_tables().into_paginator().items().send();
    while let Some(name) = stream.next().await {
        names.push(name.map_err(ActionError::from_sdk)?);
    }
    Ok(names)
}
