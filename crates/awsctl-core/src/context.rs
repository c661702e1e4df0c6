//! Service client provider
//!
//! An [`AwsContext`] owns one resolved SDK configuration and hands out
//! memoized per-service clients. The context is immutable after construction:
//! changing region, endpoint, or timeouts means building a new context.
//! Dropping the context releases the underlying connection pools.

use std::sync::OnceLock;
use std::time::Duration;

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::{debug, info};

use crate::config::{ConfigError, Profile};

/// User agent suffix for awsctl requests
const AWSCTL_APP_NAME: &str = concat!("awsctl-", env!("CARGO_PKG_VERSION"));

/// A configured handle to AWS, owning lazily-built service clients.
///
/// Client construction is idempotent: repeated calls to [`AwsContext::dynamodb`]
/// or [`AwsContext::s3`] return the same cached client rather than opening new
/// connection pools. The clients are safe to share across concurrent calls.
pub struct AwsContext {
    profile_name: String,
    sdk_config: SdkConfig,
    dynamodb: OnceLock<aws_sdk_dynamodb::Client>,
    s3: OnceLock<aws_sdk_s3::Client>,
}

impl AwsContext {
    /// Build a context from a resolved profile.
    ///
    /// Fails fast on malformed profile values before anything touches the
    /// network. When `use_env` is set (no explicit `--config-file`, matching
    /// the "explicit wins" rule), `AWSCTL_REGION` and `AWSCTL_ENDPOINT_URL`
    /// override the profile's values.
    pub async fn load(
        profile_name: &str,
        profile: &Profile,
        use_env: bool,
    ) -> Result<Self, ConfigError> {
        profile.validate()?;

        let mut profile = profile.clone();
        if use_env {
            if let Ok(region) = std::env::var("AWSCTL_REGION") {
                debug!("Overriding region from AWSCTL_REGION");
                profile.region = Some(region);
            }
            if let Ok(url) = std::env::var("AWSCTL_ENDPOINT_URL") {
                debug!("Overriding endpoint from AWSCTL_ENDPOINT_URL");
                profile.endpoint_url = Some(url);
            }
            // Overrides bypass the load-time check, so re-validate.
            profile.validate()?;
        } else {
            info!("--config-file specified explicitly, ignoring environment overrides");
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .app_name(
                aws_config::AppName::new(AWSCTL_APP_NAME)
                    .map_err(|e| ConfigError::Invalid(e.to_string()))?,
            );

        if let Some(region) = profile.region.clone() {
            loader = loader.region(Region::new(region));
        }
        if let Some(aws_profile) = &profile.aws_profile {
            loader = loader.profile_name(aws_profile.as_str());
        }
        if let Some(url) = &profile.endpoint_url {
            info!("Using endpoint override: {}", url);
            loader = loader.endpoint_url(url.as_str());
        }

        let mut timeouts = TimeoutConfig::builder();
        if let Some(secs) = profile.operation_timeout_secs {
            timeouts = timeouts.operation_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = profile.connect_timeout_secs {
            timeouts = timeouts.connect_timeout(Duration::from_secs(secs));
        }
        loader = loader.timeout_config(timeouts.build());

        if let Some(attempts) = profile.max_attempts {
            loader = loader.retry_config(RetryConfig::standard().with_max_attempts(attempts));
        }

        let sdk_config = loader.load().await;
        debug!(
            "Resolved SDK config for profile '{}' (region: {:?})",
            profile_name,
            sdk_config.region()
        );

        Ok(Self::from_sdk_config(profile_name, sdk_config))
    }

    /// Wrap an already-built SDK configuration.
    ///
    /// Used by tests and tools that point the clients at a stub endpoint.
    pub fn from_sdk_config(profile_name: &str, sdk_config: SdkConfig) -> Self {
        Self {
            profile_name: profile_name.to_string(),
            sdk_config,
            dynamodb: OnceLock::new(),
            s3: OnceLock::new(),
        }
    }

    /// Name of the profile this context was built from
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// Region the context resolved to, if any
    pub fn region(&self) -> Option<String> {
        self.sdk_config.region().map(|r| r.to_string())
    }

    /// DynamoDB client, built on first use and cached for the context lifetime
    pub fn dynamodb(&self) -> &aws_sdk_dynamodb::Client {
        self.dynamodb.get_or_init(|| {
            debug!("Constructing DynamoDB client");
            aws_sdk_dynamodb::Client::new(&self.sdk_config)
        })
    }

    /// S3 client, built on first use and cached for the context lifetime
    pub fn s3(&self) -> &aws_sdk_s3::Client {
        self.s3.get_or_init(|| {
            debug!("Constructing S3 client");
            aws_sdk_s3::Client::new(&self.sdk_config)
        })
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("profile_name", &self.profile_name)
            .field("region", &self.sdk_config.region())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build()
    }

    #[test]
    fn clients_are_memoized() {
        let ctx = AwsContext::from_sdk_config("test", bare_config());
        let first = ctx.dynamodb() as *const _;
        let second = ctx.dynamodb() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn region_is_exposed() {
        let ctx = AwsContext::from_sdk_config("test", bare_config());
        assert_eq!(ctx.region().as_deref(), Some("us-east-1"));
    }

    #[tokio::test]
    async fn malformed_profile_fails_before_loading() {
        let profile = Profile {
            region: Some("  ".to_string()),
            ..Profile::default()
        };
        let err = AwsContext::load("bad", &profile, false).await.unwrap_err();
        assert!(err.to_string().contains("region"));
    }
}
