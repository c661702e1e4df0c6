//! S3 command handlers

use std::fs;

use awsctl_core::present;
use awsctl_core::s3::{
    self, BucketParams, CreateBucketParams, ListObjectsParams, ObjectParams, PutObjectParams,
};
use serde_json::json;

use crate::cli::{Cli, S3Commands};
use crate::connection::ConnectionManager;
use crate::error::{AwsctlError, Result as CliResult};
use crate::output::{print_output, OutputFormat};

pub async fn handle_s3_command(
    conn_mgr: &ConnectionManager,
    cmd: &S3Commands,
    cli: &Cli,
) -> CliResult<()> {
    let ctx = conn_mgr
        .create_context(cli.profile.as_deref(), cli.region.as_deref())
        .await?;
    let client = ctx.s3();

    match cmd {
        S3Commands::ListBuckets => {
            let buckets = s3::list_buckets(client).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::bucket_listing(&buckets)),
                other => print_output(&buckets, other)?,
            }
        }

        S3Commands::CreateBucket { bucket } => {
            let params = CreateBucketParams::new(bucket, ctx.region());
            let location = s3::create_bucket(client, &params).await?;
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Created bucket at {}", location);
                }
                other => print_output(json!({ "bucket": bucket, "location": location }), other)?,
            }
        }

        S3Commands::DeleteBucket { bucket } => {
            s3::delete_bucket(client, &BucketParams::new(bucket)).await?;
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Deleted bucket '{}'", bucket);
                }
                other => print_output(json!({ "deleted": bucket }), other)?,
            }
        }

        S3Commands::ListObjects { bucket, prefix } => {
            let params = ListObjectsParams::new(bucket, prefix.clone());
            let objects = s3::list_objects(client, &params).await?;
            match cli.output {
                OutputFormat::Auto => println!("{}", present::object_listing(&objects)),
                other => print_output(&objects, other)?,
            }
        }

        S3Commands::PutObject {
            bucket,
            key,
            body,
            file,
            content_type,
        } => {
            let bytes = match (body, file) {
                (Some(body), None) => body.clone().into_bytes(),
                (None, Some(path)) => fs::read(path).map_err(|e| AwsctlError::FileError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?,
                _ => {
                    return Err(AwsctlError::InvalidInput {
                        message: "provide the object content with --body or --file".to_string(),
                    })
                }
            };

            let mut params = PutObjectParams::new(bucket, key, bytes);
            if let Some(content_type) = content_type {
                params = params.with_content_type(content_type);
            }
            s3::put_object(client, &params).await?;
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Uploaded '{}' to '{}'", key, bucket);
                }
                other => print_output(json!({ "bucket": bucket, "key": key }), other)?,
            }
        }

        S3Commands::GetObject { bucket, key, out } => {
            let content = s3::get_object(client, &ObjectParams::new(bucket, key)).await?;
            if let Some(path) = out {
                fs::write(path, &content.bytes).map_err(|e| AwsctlError::FileError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                println!("Wrote {} bytes to {}", content.len(), path.display());
            } else {
                match cli.output {
                    OutputFormat::Auto | OutputFormat::Table => {
                        println!("{}", present::object_content(&content));
                    }
                    other => print_output(
                        json!({
                            "key": content.key,
                            "size": content.len(),
                            "content_type": content.content_type,
                            "text": content.as_text(),
                        }),
                        other,
                    )?,
                }
            }
        }

        S3Commands::DeleteObject { bucket, key } => {
            s3::delete_object(client, &ObjectParams::new(bucket, key)).await?;
            match cli.output {
                OutputFormat::Auto | OutputFormat::Table => {
                    println!("Deleted '{}' from '{}'", key, bucket);
                }
                other => print_output(json!({ "bucket": bucket, "deleted": key }), other)?,
            }
        }
    }

    Ok(())
}
