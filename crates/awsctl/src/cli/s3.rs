//! S3 command definitions

use std::path::PathBuf;

use clap::Subcommand;

/// S3 actions
#[derive(Subcommand, Debug)]
pub enum S3Commands {
    /// List buckets owned by the caller
    ListBuckets,

    /// Create a bucket in the context's region
    CreateBucket {
        /// Bucket name
        #[arg(long)]
        bucket: String,
    },

    /// Delete an empty bucket
    DeleteBucket {
        /// Bucket name
        #[arg(long)]
        bucket: String,
    },

    /// List objects, optionally under a prefix
    ListObjects {
        /// Bucket name
        #[arg(long)]
        bucket: String,

        /// Key prefix to filter on
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Upload one object from a string or a file
    PutObject {
        /// Bucket name
        #[arg(long)]
        bucket: String,

        /// Object key
        #[arg(long)]
        key: String,

        /// Inline object content
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,

        /// File to upload instead of inline content
        #[arg(long)]
        file: Option<PathBuf>,

        /// Content type to store with the object
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Download one object
    GetObject {
        /// Bucket name
        #[arg(long)]
        bucket: String,

        /// Object key
        #[arg(long)]
        key: String,

        /// Write the body to this file instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Delete one object
    DeleteObject {
        /// Bucket name
        #[arg(long)]
        bucket: String,

        /// Object key
        #[arg(long)]
        key: String,
    },
}
