//! DynamoDB getting-started scenario
//!
//! State inputs: `table_name`, `partition_key`, `item` (JSON object that must
//! carry the partition key attribute). Optional: `wait_timeout_secs`,
//! `wait_interval_secs`, `keep_table`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::context::AwsContext;
use crate::dynamodb::{self, CreateTableParams, GetItemParams, PutItemParams, QueryParams, TableParams};
use crate::error::{ActionError, ActionResult};
use crate::present;
use crate::scenario::{Scenario, ScenarioState, Step, StepOutput};

const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 300;
const DEFAULT_WAIT_INTERVAL_SECS: u64 = 5;

pub(super) fn build() -> Scenario {
    Scenario::new(
        "dynamodb-getting-started",
        "Create a table, wait for it to become active, write and read an item, query, then clean up",
    )
    .step(CreateTable)
    .step(WaitActive)
    .step(PutItem)
    .step(GetItem)
    .step(QueryItems)
    .step(DeleteTable)
}

/// The partition key's value inside the configured item
fn partition_key_value(state: &ScenarioState) -> ActionResult<(String, String)> {
    let key_name = state.require_str("partition_key")?;
    let item = state.require("item")?;
    let value = item
        .get(&key_name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ActionError::validation(format!(
                "item must carry a string attribute named '{key_name}' (the partition key)"
            ))
        })?;
    Ok((key_name, value))
}

struct CreateTable;

#[async_trait]
impl Step for CreateTable {
    fn label(&self) -> &str {
        "create table"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        let partition_key = state.require_str("partition_key")?;
        let params = CreateTableParams::new(&table_name, &partition_key);

        match dynamodb::create_table(ctx.dynamodb(), &params).await {
            Ok(summary) => {
                if let Some(arn) = &summary.arn {
                    state.insert("table_arn", arn.clone());
                }
                Ok(StepOutput::new(format!(
                    "created {}",
                    present::table_line(&summary)
                )))
            }
            // Idempotent setup: a table left over from an earlier run is fine.
            Err(err) if err.is_already_exists() => Ok(StepOutput::new(format!(
                "table '{table_name}' already exists, continuing"
            ))),
            Err(err) => Err(err),
        }
    }
}

struct WaitActive;

#[async_trait]
impl Step for WaitActive {
    fn label(&self) -> &str {
        "wait until table is active"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        let timeout = state
            .get("wait_timeout_secs")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_WAIT_TIMEOUT_SECS);
        let interval = state
            .get("wait_interval_secs")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_WAIT_INTERVAL_SECS);

        let summary = dynamodb::wait_for_table_active(
            ctx.dynamodb(),
            &table_name,
            Duration::from_secs(timeout),
            Duration::from_secs(interval),
            None,
        )
        .await?;
        if let Some(arn) = &summary.arn {
            state.insert("table_arn", arn.clone());
        }
        Ok(StepOutput::new(present::table_line(&summary)))
    }
}

struct PutItem;

#[async_trait]
impl Step for PutItem {
    fn label(&self) -> &str {
        "put item"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        let (_, key_value) = partition_key_value(state)?;
        let item = state.require("item")?;
        let params = PutItemParams::new(&table_name, item);
        dynamodb::put_item(ctx.dynamodb(), &params).await?;
        Ok(StepOutput::new(format!(
            "put item '{key_value}' into '{table_name}'"
        )))
    }
}

struct GetItem;

#[async_trait]
impl Step for GetItem {
    fn label(&self) -> &str {
        "get item"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        let (key_name, key_value) = partition_key_value(state)?;
        let params = GetItemParams::new(
            &table_name,
            serde_json::json!({ key_name: key_value }),
        );
        let item = dynamodb::get_item(ctx.dynamodb(), &params).await?;
        Ok(StepOutput::new(present::item_json(item.as_ref())))
    }
}

struct QueryItems;

#[async_trait]
impl Step for QueryItems {
    fn label(&self) -> &str {
        "query by partition key"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        let (key_name, key_value) = partition_key_value(state)?;
        let params = QueryParams::new(&table_name, &key_name, &key_value);
        let items = dynamodb::query(ctx.dynamodb(), &params).await?;
        Ok(StepOutput::new(present::items_json(&items)))
    }
}

struct DeleteTable;

#[async_trait]
impl Step for DeleteTable {
    fn label(&self) -> &str {
        "delete table"
    }

    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput> {
        let table_name = state.require_str("table_name")?;
        if state.get_bool("keep_table") {
            return Ok(StepOutput::new(format!(
                "keeping table '{table_name}' (cleanup skipped)"
            )));
        }
        let params = TableParams::new(&table_name);
        dynamodb::delete_table(ctx.dynamodb(), &params).await?;
        Ok(StepOutput::new(format!("deleted table '{table_name}'")))
    }
}
