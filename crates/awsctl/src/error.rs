//! Error types for the awsctl binary
//!
//! Structured errors with cargo-style diagnostics: a one-line `error:` on
//! stderr followed by concrete follow-up tips where we can suggest any.

#![allow(dead_code)] // Diagnostic helpers are wired up incrementally

use awsctl_core::{ActionError, ConfigError};
use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: profile 'prod' not found
///
///   tip: list configured profiles:
///       awsctl profile list
/// ```
pub struct CliDiagnostic {
    message: String,
    detail: Option<String>,
    tips: Vec<(String, Vec<String>)>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detail: None,
            tips: Vec::new(),
        }
    }

    /// Add a detail line below the error message.
    pub fn detail(mut self, text: &str) -> Self {
        self.detail = Some(text.to_string());
        self
    }

    /// Add a tip with optional example commands.
    pub fn tip(mut self, description: &str, commands: &[&str]) -> Self {
        self.tips.push((
            description.to_string(),
            commands.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        if let Some(detail) = &self.detail {
            eprintln!("  {}", detail);
        }

        for (description, commands) in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
            for cmd in commands {
                eprintln!("      {}", cmd);
            }
        }
    }
}

/// Main error type for the awsctl application
#[derive(Error, Debug)]
pub enum AwsctlError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Scenario '{scenario}' failed at step '{step}': {reason}")]
    ScenarioFailed {
        scenario: String,
        step: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },

    #[error("File error for '{path}': {message}")]
    FileError { path: String, message: String },
}

/// Result type for awsctl operations
pub type Result<T> = std::result::Result<T, AwsctlError>;

impl AwsctlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AwsctlError::ProfileNotFound { name } => vec![
                "List configured profiles: awsctl profile list".to_string(),
                format!("Create profile '{name}': awsctl profile set {name} --region <region>"),
            ],
            AwsctlError::Configuration(_) => vec![
                "Show the config file location: awsctl profile path".to_string(),
                "Check profile values: awsctl profile list -o yaml".to_string(),
            ],
            AwsctlError::Action(err) if err.is_retryable() => vec![
                "Check network connectivity and any endpoint_url override".to_string(),
                "Transient failures often succeed on retry; raise max_attempts in the profile"
                    .to_string(),
            ],
            AwsctlError::Action(ActionError::Rejection { code, .. })
                if code.contains("Token") || code.contains("Credential") =>
            {
                vec![
                    "Verify credentials for the AWS profile this context uses".to_string(),
                    "Set aws_profile in the awsctl profile, or export AWS_PROFILE".to_string(),
                ]
            }
            AwsctlError::Action(err) if err.is_not_found() => vec![
                "List existing resources first (list-tables, list-buckets)".to_string(),
                "Check that you are using the right profile and region".to_string(),
            ],
            AwsctlError::InvalidInput { .. } => vec![
                "Check the command syntax: awsctl <command> --help".to_string(),
            ],
            AwsctlError::FileError { path, .. } => vec![
                format!("Check that the file exists and is readable: {path}"),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion, &[]);
        }

        diag.print();
    }
}

impl From<ConfigError> for AwsctlError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound(name) => AwsctlError::ProfileNotFound { name },
            other => AwsctlError::Configuration(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AwsctlError {
    fn from(err: serde_json::Error) -> Self {
        AwsctlError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for AwsctlError {
    fn from(err: std::io::Error) -> Self {
        AwsctlError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_not_found_has_suggestions() {
        let err = AwsctlError::ProfileNotFound {
            name: "prod".to_string(),
        };
        let tips = err.suggestions();
        assert!(!tips.is_empty());
        assert!(tips.iter().any(|t| t.contains("profile set prod")));
    }

    #[test]
    fn config_errors_convert_with_profile_special_case() {
        let err: AwsctlError = ConfigError::ProfileNotFound("dev".to_string()).into();
        assert!(matches!(err, AwsctlError::ProfileNotFound { .. }));

        let err: AwsctlError = ConfigError::Invalid("bad region".to_string()).into();
        assert!(matches!(err, AwsctlError::Configuration(_)));
    }

    #[test]
    fn transport_actions_suggest_retry() {
        let err = AwsctlError::Action(ActionError::Transport("connection reset".into()));
        assert!(err
            .suggestions()
            .iter()
            .any(|t| t.contains("max_attempts")));
    }
}
