use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use awsctl_core::Config;
use tracing::{debug, error, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::AwsctlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    // Load configuration from specified path or default location
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    let conn_mgr = ConnectionManager::with_config_path(config, config_path);

    // Execute command
    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "awsctl=warn,awsctl_core=warn",
            1 => "awsctl=info,awsctl_core=info",
            2 => "awsctl=debug,awsctl_core=debug,aws_config=debug",
            _ => "awsctl=trace,awsctl_core=trace,aws_config=trace,aws_smithy_runtime=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), AwsctlError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::Version => {
            debug!("Showing version information");
            if cli.output.is_structured() {
                let output_data = serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "name": env!("CARGO_PKG_NAME"),
                });
                output::print_output(&output_data, cli.output)?;
            } else {
                println!("awsctl {}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            debug!("Generating completions for {:?}", shell);
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }

        Commands::Profile(profile_cmd) => {
            debug!("Executing profile command");
            commands::profile::handle_profile_command(profile_cmd, conn_mgr, cli.output).await
        }

        Commands::Dynamodb(dynamodb_cmd) => {
            commands::dynamodb::handle_dynamodb_command(conn_mgr, dynamodb_cmd, cli).await
        }

        Commands::S3(s3_cmd) => commands::s3::handle_s3_command(conn_mgr, s3_cmd, cli).await,

        Commands::Scenario(scenario_cmd) => {
            commands::scenario::handle_scenario_command(conn_mgr, scenario_cmd, cli).await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Format command for human-readable logging
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Version => "version".to_string(),
        Commands::Completions { shell } => format!("completions {:?}", shell),
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {}", name),
                Set { name, .. } => format!("profile set {}", name),
                Remove { name } => format!("profile remove {}", name),
                Default { name } => format!("profile default {}", name),
            }
        }
        Commands::Dynamodb(cmd) => format!("dynamodb {:?}", cmd),
        Commands::S3(cmd) => format!("s3 {:?}", cmd),
        Commands::Scenario(cmd) => {
            use cli::ScenarioCommands::*;
            match cmd {
                List => "scenario list".to_string(),
                DynamodbGettingStarted { table, .. } => {
                    format!("scenario dynamodb-getting-started --table {}", table)
                }
                S3GettingStarted { bucket, .. } => {
                    format!("scenario s3-getting-started --bucket {}", bucket)
                }
            }
        }
    }
}
