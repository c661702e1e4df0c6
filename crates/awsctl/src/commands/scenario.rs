//! Scenario command handlers
//!
//! Seeds the scenario state from command-line arguments, wires the
//! interactive gate and the step observer, and turns the final report into
//! output and an exit status. A failed step is fatal; an operator cancel is
//! an orderly stop, not an error.

use awsctl_core::scenario::{
    AutoApprove, Gate, ScenarioState, ScenarioStatus, StepEvent,
};
use awsctl_core::ScenarioRegistry;
use colored::Colorize;
use serde_json::{json, Value};

use crate::cli::{Cli, ScenarioCommands};
use crate::connection::ConnectionManager;
use crate::error::{AwsctlError, Result as CliResult};
use crate::output::print_output;

/// Gate that asks the operator before each step
struct ConsoleGate;

impl Gate for ConsoleGate {
    fn confirm(&self, label: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(format!("Continue with '{label}'?"))
            .default(true)
            .interact()
            .unwrap_or(false)
    }
}

pub async fn handle_scenario_command(
    conn_mgr: &ConnectionManager,
    cmd: &ScenarioCommands,
    cli: &Cli,
) -> CliResult<()> {
    match cmd {
        ScenarioCommands::List => {
            let registry = ScenarioRegistry::new();
            let scenarios = registry.list();

            if cli.output.is_structured() {
                let list: Vec<Value> = scenarios
                    .into_iter()
                    .map(|(name, description)| {
                        json!({ "name": name, "description": description })
                    })
                    .collect();
                print_output(&list, cli.output)?;
            } else {
                println!("Available scenarios:");
                println!();
                for (name, description) in scenarios {
                    println!("  {} - {}", name, description);
                }
            }
            Ok(())
        }

        ScenarioCommands::DynamodbGettingStarted {
            table,
            partition_key,
            item,
            yes,
            keep_table,
            wait_timeout,
            wait_interval,
        } => {
            let item: Value =
                serde_json::from_str(item).map_err(|e| AwsctlError::InvalidInput {
                    message: format!("--item is not valid JSON: {e}"),
                })?;

            let mut state = ScenarioState::new();
            state.insert("table_name", table.as_str());
            state.insert("partition_key", partition_key.as_str());
            state.insert("item", item);
            state.insert("wait_timeout_secs", *wait_timeout);
            state.insert("wait_interval_secs", *wait_interval);
            state.insert("keep_table", *keep_table);

            run_scenario(conn_mgr, cli, "dynamodb-getting-started", state, *yes).await
        }

        ScenarioCommands::S3GettingStarted {
            bucket,
            key,
            content,
            yes,
            keep_bucket,
        } => {
            let mut state = ScenarioState::new();
            state.insert("bucket_name", bucket.as_str());
            state.insert("object_key", key.as_str());
            state.insert("content", content.as_str());
            state.insert("keep_bucket", *keep_bucket);

            run_scenario(conn_mgr, cli, "s3-getting-started", state, *yes).await
        }
    }
}

async fn run_scenario(
    conn_mgr: &ConnectionManager,
    cli: &Cli,
    name: &str,
    mut state: ScenarioState,
    unattended: bool,
) -> CliResult<()> {
    let registry = ScenarioRegistry::new();
    let scenario = registry
        .build(name)
        .ok_or_else(|| AwsctlError::InvalidInput {
            message: format!("unknown scenario '{name}'"),
        })?;

    let ctx = conn_mgr
        .create_context(cli.profile.as_deref(), cli.region.as_deref())
        .await?;

    let structured = cli.output.is_structured();
    if !structured {
        println!("{}", scenario.description().bold());
        println!(
            "{} steps. Resources created by completed steps persist if a later step fails.",
            scenario.step_count()
        );
        println!();
    }

    let gate: Box<dyn Gate> = if unattended {
        Box::new(AutoApprove)
    } else {
        Box::new(ConsoleGate)
    };

    let observer = move |event: StepEvent<'_>| {
        if structured {
            return;
        }
        match event {
            StepEvent::Started {
                index,
                total,
                label,
            } => {
                println!(
                    "{} {}",
                    format!("[{}/{}]", index + 1, total).cyan().bold(),
                    label
                );
            }
            StepEvent::Completed { summary, .. } => {
                for line in summary.lines() {
                    println!("    {line}");
                }
                println!();
            }
            StepEvent::Cancelled { label, .. } => {
                println!("{} stopped before '{}'", "cancelled".yellow().bold(), label);
            }
            StepEvent::Failed { label, reason, .. } => {
                eprintln!("{} '{}': {}", "step failed".red().bold(), label, reason);
            }
        }
    };

    let report = scenario
        .run_with_observer(&ctx, gate.as_ref(), &mut state, Some(&observer))
        .await;

    if structured {
        let status = match &report.status {
            ScenarioStatus::Completed => "completed",
            ScenarioStatus::Aborted { .. } if report.cancelled() => "cancelled",
            ScenarioStatus::Aborted { .. } => "aborted",
            _ => "unknown",
        };
        let result = json!({
            "scenario": report.scenario,
            "status": status,
            "steps": report
                .steps
                .iter()
                .map(|s| json!({ "label": s.label, "summary": s.summary }))
                .collect::<Vec<_>>(),
            "failure": report
                .failure()
                .map(|(step, reason)| json!({ "step": step, "reason": reason })),
        });
        print_output(&result, cli.output)?;
    }

    match &report.status {
        ScenarioStatus::Completed => {
            if !structured {
                println!("{}", "Scenario completed.".green().bold());
            }
            Ok(())
        }
        ScenarioStatus::Aborted { .. } if report.cancelled() => Ok(()),
        ScenarioStatus::Aborted { label, reason, .. } => Err(AwsctlError::ScenarioFailed {
            scenario: name.to_string(),
            step: label.clone(),
            reason: reason.clone(),
        }),
        // The runner only returns terminal statuses.
        _ => Ok(()),
    }
}
