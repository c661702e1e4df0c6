//! DynamoDB command handlers

use std::time::Duration;

use awsctl_core::dynamodb::{
    self, CreateTableParams, GetItemParams, PutItemParams, QueryParams, TableParams,
};
use awsctl_core::present;
use serde_json::{json, Value};
use tracing::debug;

use crate::cli::{Cli, DynamodbCommands};
use crate::connection::ConnectionManager;
use crate::error::{AwsctlError, Result as CliResult};
use crate::output::{print_output, OutputFormat};

fn parse_json_arg(flag: &str, raw: &str) -> CliResult<Value> {
    serde_json::from_str(raw).map_err(|e| AwsctlError::InvalidInput {
        message: format!("{flag} is not valid JSON: {e}"),
    })
}

pub async fn handle_dynamodb_command(
    conn_mgr: &ConnectionManager,
    cmd: &DynamodbCommands,
    cli: &Cli,
) -> CliResult<()> {
    let ctx = conn_mgr
        .create_context(cli.profile.as_deref(), cli.region.as_deref())
        .await?;
    let client = ctx.dynamodb();

    match cmd {
        DynamodbCommands::ListTables => {
            let names = dynamodb::list_tables(client).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::listing(&names)),
                other => print_output(&names, other)?,
            }
        }

        DynamodbCommands::CreateTable {
            table,
            partition_key,
            sort_key,
            wait,
        } => {
            let mut params = CreateTableParams::new(table, partition_key);
            if let Some(sort_key) = sort_key {
                params = params.with_sort_key(sort_key);
            }
            let mut summary = dynamodb::create_table(client, &params).await?;

            if wait.wait {
                let (pb, callback) = super::spinner_progress();
                let result = dynamodb::wait_for_table_active(
                    client,
                    table,
                    Duration::from_secs(wait.wait_timeout),
                    Duration::from_secs(wait.wait_interval),
                    Some(callback),
                )
                .await;
                pb.finish_and_clear();
                summary = result?;
            }

            match cli.output {
                OutputFormat::Auto => println!("{}", present::table_summary(&summary)),
                other => print_output(&summary, other)?,
            }
        }

        DynamodbCommands::DescribeTable { table } => {
            let summary = dynamodb::describe_table(client, &TableParams::new(table)).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::table_summary(&summary)),
                other => print_output(&summary, other)?,
            }
        }

        DynamodbCommands::DeleteTable { table } => {
            dynamodb::delete_table(client, &TableParams::new(table)).await?;
            debug!("Delete accepted for '{}'", table);
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Deleted table '{}'", table);
                }
                other => print_output(json!({ "deleted": table }), other)?,
            }
        }

        DynamodbCommands::PutItem { table, item } => {
            let item = parse_json_arg("--item", item)?;
            let params = PutItemParams::new(table, item);
            dynamodb::put_item(client, &params).await?;
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Put item into '{}'", table);
                }
                other => print_output(json!({ "table": table, "written": true }), other)?,
            }
        }

        DynamodbCommands::GetItem { table, key } => {
            let key = parse_json_arg("--key", key)?;
            let params = GetItemParams::new(table, key);
            let item = dynamodb::get_item(client, &params).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::item_json(item.as_ref())),
                other => print_output(&item, other)?,
            }
        }

        DynamodbCommands::Query {
            table,
            key_name,
            key_value,
        } => {
            let params = QueryParams::new(table, key_name, key_value);
            let items = dynamodb::query(client, &params).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::items_json(&items)),
                other => print_output(&items, other)?,
            }
        }
    }

    Ok(())
}
