//! Context construction for command handlers

use std::path::PathBuf;

use awsctl_core::{AwsContext, Config};
use tracing::{debug, info};

use crate::error::Result as CliResult;

/// Builds AWS contexts from the loaded configuration.
///
/// When `--config-file` is explicitly specified, environment overrides are
/// ignored so the run is fully isolated to that file ("explicit wins":
/// CLI args > env vars > defaults).
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl ConnectionManager {
    /// Create a new connection manager with a custom config path
    pub fn with_config_path(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Save the configuration to the location it was loaded from
    pub fn save_config(&self) -> CliResult<()> {
        if let Some(path) = &self.config_path {
            self.config.save_to_path(path)?;
        } else {
            self.config.save()?;
        }
        Ok(())
    }

    /// Resolve a profile and build a ready-to-use context.
    ///
    /// A `--region` override beats the profile's configured region.
    pub async fn create_context(
        &self,
        profile_name: Option<&str>,
        region_override: Option<&str>,
    ) -> CliResult<AwsContext> {
        let (name, mut profile) = self.config.resolve_profile(profile_name)?;
        info!("Using profile '{}'", name);

        if let Some(region) = region_override {
            debug!("Overriding region from --region: {}", region);
            profile.region = Some(region.to_string());
        }

        let use_env = self.config_path.is_none();
        let ctx = AwsContext::load(&name, &profile, use_env).await?;
        debug!("Context ready (region: {:?})", ctx.region());
        Ok(ctx)
    }
}
