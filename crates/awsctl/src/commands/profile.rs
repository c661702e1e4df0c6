//! Profile command handlers

use awsctl_core::Config;
use serde_json::{json, Value};

use crate::cli::ProfileCommands;
use crate::connection::ConnectionManager;
use crate::error::{AwsctlError, Result as CliResult};
use crate::output::{print_output, OutputFormat};

fn profile_row(config: &Config, name: &str) -> Value {
    let profile = &config.profiles[name];
    json!({
        "name": name,
        "region": profile.region,
        "aws_profile": profile.aws_profile,
        "endpoint_url": profile.endpoint_url,
        "default": config.default_profile.as_deref() == Some(name),
    })
}

pub async fn handle_profile_command(
    cmd: &ProfileCommands,
    conn_mgr: &ConnectionManager,
    output: OutputFormat,
) -> CliResult<()> {
    match cmd {
        ProfileCommands::List => {
            let config = &conn_mgr.config;
            if output.is_structured() || output == OutputFormat::Table {
                let rows: Vec<Value> = config
                    .profiles
                    .keys()
                    .map(|name| profile_row(config, name))
                    .collect();
                print_output(&rows, output)?;
            } else if config.profiles.is_empty() {
                println!("No profiles configured. The SDK's default credential chain applies.");
                println!("Create one with: awsctl profile set <name> --region <region>");
            } else {
                for (name, profile) in &config.profiles {
                    let marker = if config.default_profile.as_deref() == Some(name.as_str()) {
                        " (default)"
                    } else {
                        ""
                    };
                    let region = profile.region.as_deref().unwrap_or("-");
                    println!("{name}{marker}  region={region}");
                }
            }
            Ok(())
        }

        ProfileCommands::Path => {
            let path = match &conn_mgr.config_path {
                Some(path) => path.clone(),
                None => Config::default_path()?,
            };
            println!("{}", path.display());
            Ok(())
        }

        ProfileCommands::Show { name } => {
            let profile =
                conn_mgr
                    .config
                    .profiles
                    .get(name)
                    .ok_or_else(|| AwsctlError::ProfileNotFound {
                        name: name.clone(),
                    })?;
            match output {
                OutputFormat::Auto => {
                    println!("{}", toml_like(name, profile));
                }
                other => print_output(profile, other)?,
            }
            Ok(())
        }

        ProfileCommands::Set {
            name,
            region,
            aws_profile,
            endpoint_url,
            operation_timeout,
            connect_timeout,
            max_attempts,
            default,
        } => {
            let mut mgr = conn_mgr.clone();
            {
                let profile = mgr.config.profiles.entry(name.clone()).or_default();
                if let Some(region) = region {
                    profile.region = Some(region.clone());
                }
                if let Some(aws_profile) = aws_profile {
                    profile.aws_profile = Some(aws_profile.clone());
                }
                if let Some(endpoint_url) = endpoint_url {
                    profile.endpoint_url = Some(endpoint_url.clone());
                }
                if let Some(secs) = operation_timeout {
                    profile.operation_timeout_secs = Some(*secs);
                }
                if let Some(secs) = connect_timeout {
                    profile.connect_timeout_secs = Some(*secs);
                }
                if let Some(attempts) = max_attempts {
                    profile.max_attempts = Some(*attempts);
                }
                profile.validate()?;
            }
            if *default {
                mgr.config.default_profile = Some(name.clone());
            }
            mgr.save_config()?;
            println!("Profile '{}' saved", name);
            Ok(())
        }

        ProfileCommands::Remove { name } => {
            let mut mgr = conn_mgr.clone();
            if mgr.config.profiles.remove(name).is_none() {
                return Err(AwsctlError::ProfileNotFound { name: name.clone() });
            }
            if mgr.config.default_profile.as_deref() == Some(name.as_str()) {
                mgr.config.default_profile = None;
            }
            mgr.save_config()?;
            println!("Profile '{}' removed", name);
            Ok(())
        }

        ProfileCommands::Default { name } => {
            let mut mgr = conn_mgr.clone();
            if !mgr.config.profiles.contains_key(name) {
                return Err(AwsctlError::ProfileNotFound { name: name.clone() });
            }
            mgr.config.default_profile = Some(name.clone());
            mgr.save_config()?;
            println!("Default profile set to '{}'", name);
            Ok(())
        }
    }
}

fn toml_like(name: &str, profile: &awsctl_core::Profile) -> String {
    let mut lines = vec![format!("[profiles.{name}]")];
    if let Some(region) = &profile.region {
        lines.push(format!("region = \"{region}\""));
    }
    if let Some(aws_profile) = &profile.aws_profile {
        lines.push(format!("aws_profile = \"{aws_profile}\""));
    }
    if let Some(endpoint_url) = &profile.endpoint_url {
        lines.push(format!("endpoint_url = \"{endpoint_url}\""));
    }
    if let Some(secs) = profile.operation_timeout_secs {
        lines.push(format!("operation_timeout_secs = {secs}"));
    }
    if let Some(secs) = profile.connect_timeout_secs {
        lines.push(format!("connect_timeout_secs = {secs}"));
    }
    if let Some(attempts) = profile.max_attempts {
        lines.push(format!("max_attempts = {attempts}"));
    }
    lines.join("\n")
}
