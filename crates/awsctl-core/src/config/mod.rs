//! Configuration management for awsctl
//!
//! Profiles are stored in a TOML file and name everything needed to build a
//! service client: region, the AWS shared-config profile to take credentials
//! from, an optional endpoint override, timeouts, and the SDK retry budget.
//! Credentials themselves are never stored here; they are resolved by the
//! SDK's standard provider chain at client construction time.

mod error;

pub use error::{ConfigError, Result};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when no `--profile` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// Individual profile configuration
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Profile {
    /// AWS region, e.g. "eu-west-1". Falls back to the SDK's own region
    /// chain when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Named profile in the AWS shared config/credentials files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_profile: Option<String>,

    /// Endpoint override, e.g. "http://localhost:4566" for a local stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Per-operation timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_timeout_secs: Option<u64>,

    /// TCP connect timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Total attempts for the SDK's built-in retry; 1 disables retries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

impl Profile {
    /// Reject values that would only fail later, inside the SDK.
    ///
    /// Construction must fail fast with a configuration error before any
    /// action runs, so the obvious mistakes are caught here.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(ConfigError::Invalid("region must not be empty".into()));
            }
        }
        if let Some(url) = &self.endpoint_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "endpoint_url '{url}' must start with http:// or https://"
                )));
            }
        }
        if self.max_attempts == Some(0) {
            return Err(ConfigError::Invalid(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Default config file location for this platform
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "awsctl").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; it yields an empty configuration so
    /// the tool works out of the box with the SDK's own credential chain.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using empty configuration", path);
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        for (name, profile) in &config.profiles {
            profile
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("profile '{name}': {e}")))?;
        }
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::default_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(format!("could not serialize config: {e}")))?;
        fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve a profile by explicit name, falling back to the default.
    ///
    /// With no profiles configured at all, resolution yields an implicit
    /// empty profile named "default": every setting then comes from the
    /// SDK's standard environment chain.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(String, Profile)> {
        if let Some(name) = name {
            let profile = self
                .profiles
                .get(name)
                .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;
            return Ok((name.to_string(), profile.clone()));
        }
        if let Some(default) = &self.default_profile {
            let profile = self
                .profiles
                .get(default)
                .ok_or_else(|| ConfigError::DefaultProfileMissing(default.clone()))?;
            return Ok((default.clone(), profile.clone()));
        }
        Ok(("default".to_string(), Profile::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert!(config.profiles.is_empty());
        assert!(config.default_profile.is_none());
    }

    #[test]
    fn load_and_resolve_named_profile() {
        let (_dir, path) = write_config(
            r#"
default_profile = "dev"

[profiles.dev]
region = "eu-west-1"
endpoint_url = "http://localhost:4566"

[profiles.prod]
region = "us-east-1"
aws_profile = "prod-admin"
max_attempts = 5
"#,
        );
        let config = Config::load_from_path(&path).unwrap();

        let (name, profile) = config.resolve_profile(Some("prod")).unwrap();
        assert_eq!(name, "prod");
        assert_eq!(profile.region.as_deref(), Some("us-east-1"));
        assert_eq!(profile.aws_profile.as_deref(), Some("prod-admin"));
        assert_eq!(profile.max_attempts, Some(5));

        let (name, profile) = config.resolve_profile(None).unwrap();
        assert_eq!(name, "dev");
        assert_eq!(profile.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let config = Config::default();
        let err = config.resolve_profile(Some("ghost")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound(_)));
    }

    #[test]
    fn no_profiles_resolves_to_implicit_default() {
        let config = Config::default();
        let (name, profile) = config.resolve_profile(None).unwrap();
        assert_eq!(name, "default");
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn malformed_profile_fails_at_load_time() {
        let (_dir, path) = write_config(
            r#"
[profiles.bad]
endpoint_url = "localhost:4566"
"#,
        );
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("profile 'bad'"));
    }

    #[test]
    fn zero_retry_attempts_is_rejected() {
        let profile = Profile {
            max_attempts: Some(0),
            ..Profile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profiles.insert(
            "dev".to_string(),
            Profile {
                region: Some("ap-southeast-2".to_string()),
                ..Profile::default()
            },
        );
        config.default_profile = Some("dev".to_string());
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.default_profile.as_deref(), Some("dev"));
        assert_eq!(
            loaded.profiles["dev"].region.as_deref(),
            Some("ap-southeast-2")
        );
    }
}
