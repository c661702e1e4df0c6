//! DynamoDB command definitions

use clap::{Args, Subcommand};

/// Arguments for operations that can wait on a slow-to-settle resource
#[derive(Args, Debug, Clone)]
pub struct WaitArgs {
    /// Wait for the table to become active
    #[arg(long)]
    pub wait: bool,

    /// Maximum time to wait in seconds
    #[arg(long, default_value = "300")]
    pub wait_timeout: u64,

    /// Polling interval in seconds
    #[arg(long, default_value = "5")]
    pub wait_interval: u64,
}

/// DynamoDB actions
#[derive(Subcommand, Debug)]
pub enum DynamodbCommands {
    /// List table names
    ListTables,

    /// Create a table with a string partition key, billed on demand
    CreateTable {
        /// Table name
        #[arg(long)]
        table: String,

        /// Partition key attribute name
        #[arg(long, default_value = "id")]
        partition_key: String,

        /// Optional sort key attribute name
        #[arg(long)]
        sort_key: Option<String>,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Describe one table
    DescribeTable {
        /// Table name
        #[arg(long)]
        table: String,
    },

    /// Delete one table
    DeleteTable {
        /// Table name
        #[arg(long)]
        table: String,
    },

    /// Write one item from a JSON object
    PutItem {
        /// Table name
        #[arg(long)]
        table: String,

        /// The item as JSON, e.g. '{"id": "movie-001", "year": 1993}'
        #[arg(long)]
        item: String,
    },

    /// Read one item by its full primary key
    GetItem {
        /// Table name
        #[arg(long)]
        table: String,

        /// The key as JSON, e.g. '{"id": "movie-001"}'
        #[arg(long)]
        key: String,
    },

    /// Query items by partition-key equality
    Query {
        /// Table name
        #[arg(long)]
        table: String,

        /// Partition key attribute name
        #[arg(long, default_value = "id")]
        key_name: String,

        /// Partition key value to match
        #[arg(long)]
        key_value: String,
    },
}
