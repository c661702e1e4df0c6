//! CLI structure and command definitions
//!
//! Defines the command-line interface using clap with three layers:
//! 1. Single service actions (`dynamodb` / `s3` commands)
//! 2. Guided multi-step workflows (`scenario` commands)
//! 3. Profile management (`profile` commands)

use clap::{Parser, Subcommand};

pub mod dynamodb;
pub mod s3;

pub use dynamodb::*;
pub use s3::*;

use crate::output::OutputFormat;

/// awsctl - run AWS service actions and guided scenarios from the terminal
#[derive(Parser, Debug)]
#[command(name = "awsctl")]
#[command(version, about = "AWS service actions and guided end-to-end scenarios")]
#[command(long_about = "
AWS service actions and guided end-to-end scenarios

Single actions call one service operation with validated inputs:
    awsctl dynamodb list-tables
    awsctl s3 put-object --bucket my-bucket --key hello.txt --body 'hi'

Scenarios chain actions into a guided workflow, pausing for confirmation
between steps unless --yes is given:
    awsctl scenario dynamodb-getting-started --table demo-movies
    awsctl scenario s3-getting-started --bucket my-demo-bucket --yes

EXAMPLES:
    # Point a profile at a region (credentials come from the AWS chain)
    awsctl profile set dev --region eu-west-1

    # Use a local endpoint for experiments
    awsctl profile set local --region us-east-1 --endpoint-url http://localhost:4566

    # Get JSON output for scripting
    awsctl dynamodb list-tables -o json

For more help on a specific command, run:
    awsctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "AWSCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "AWSCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Region override for this command
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// DynamoDB actions
    #[command(subcommand, visible_alias = "ddb")]
    Dynamodb(DynamodbCommands),

    /// S3 actions
    #[command(subcommand)]
    S3(S3Commands),

    /// Guided multi-step scenarios
    #[command(subcommand)]
    #[command(after_help = "EXAMPLES:
    # See what is available
    awsctl scenario list

    # Walk through the DynamoDB tour, confirming each step
    awsctl scenario dynamodb-getting-started --table demo-movies

    # Unattended run that leaves the bucket in place afterwards
    awsctl scenario s3-getting-started --bucket my-demo-bucket --yes --keep-bucket
")]
    Scenario(ScenarioCommands),

    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    Profile(ProfileCommands),

    /// Version information
    #[command(visible_alias = "ver")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Scenario commands
#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// List available scenarios
    List,

    /// Create a table, wait for it, write/read/query an item, then clean up
    DynamodbGettingStarted {
        /// Table to create and (unless kept) delete
        #[arg(long)]
        table: String,

        /// Partition key attribute name
        #[arg(long, default_value = "id")]
        partition_key: String,

        /// Sample item to write, as JSON; must carry the partition key
        #[arg(
            long,
            default_value = r#"{"id": "demo-001", "title": "Hello from awsctl", "year": 2024}"#
        )]
        item: String,

        /// Run unattended, without confirmation pauses
        #[arg(long, short = 'y')]
        yes: bool,

        /// Leave the table in place instead of deleting it
        #[arg(long)]
        keep_table: bool,

        /// Maximum time to wait for the table to become active, in seconds
        #[arg(long, default_value = "300")]
        wait_timeout: u64,

        /// Polling interval while waiting, in seconds
        #[arg(long, default_value = "5")]
        wait_interval: u64,
    },

    /// Create a bucket, upload/list/download an object, then clean up
    S3GettingStarted {
        /// Bucket to create and (unless kept) delete
        #[arg(long)]
        bucket: String,

        /// Object key to upload
        #[arg(long, default_value = "hello.txt")]
        key: String,

        /// Object content to upload
        #[arg(long, default_value = "Hello from awsctl!")]
        content: String,

        /// Run unattended, without confirmation pauses
        #[arg(long, short = 'y')]
        yes: bool,

        /// Leave the bucket and object in place instead of deleting them
        #[arg(long)]
        keep_bucket: bool,
    },
}

/// Profile commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all profiles
    List,

    /// Show the config file location
    Path,

    /// Show one profile
    Show { name: String },

    /// Create or update a profile
    Set {
        name: String,

        /// AWS region, e.g. eu-west-1
        #[arg(long)]
        region: Option<String>,

        /// Named profile in the AWS shared config/credentials files
        #[arg(long)]
        aws_profile: Option<String>,

        /// Endpoint override, e.g. http://localhost:4566
        #[arg(long)]
        endpoint_url: Option<String>,

        /// Per-operation timeout in seconds
        #[arg(long)]
        operation_timeout: Option<u64>,

        /// TCP connect timeout in seconds
        #[arg(long)]
        connect_timeout: Option<u64>,

        /// Total attempts for the SDK retry budget (1 disables retries)
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Also make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Remove a profile
    Remove { name: String },

    /// Set the default profile
    Default { name: String },
}
