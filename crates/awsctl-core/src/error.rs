//! Unified error handling for awsctl-core
//!
//! Every service action funnels its failures through [`ActionError`], a tagged
//! union over the four outcomes a caller can meaningfully branch on: bad input
//! caught before dispatch, a service rejection carrying a machine-readable
//! code, a transport-level failure, and everything else.
//!
//! # Example
//!
//! ```rust
//! use awsctl_core::error::ActionError;
//!
//! fn handle_error(err: ActionError) {
//!     if err.is_already_exists() {
//!         println!("Resource already exists, continuing");
//!     } else if err.is_retryable() {
//!         println!("Temporary error, can retry");
//!     }
//! }
//! ```

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use thiserror::Error;

/// Rejection codes that mean "the resource is already there".
///
/// Callers running idempotent setup branch on these to continue gracefully.
const ALREADY_EXISTS_CODES: &[&str] = &[
    "ResourceInUseException",
    "TableAlreadyExistsException",
    "BucketAlreadyExists",
    "BucketAlreadyOwnedByYou",
];

/// Rejection codes that mean "the resource does not exist".
const NOT_FOUND_CODES: &[&str] = &[
    "ResourceNotFoundException",
    "TableNotFoundException",
    "NoSuchBucket",
    "NoSuchKey",
    "NotFound",
];

/// Error type returned by every service action
#[derive(Error, Debug)]
pub enum ActionError {
    /// Bad caller input, caught locally. Never reached the network.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The service declined the request because the resource already exists
    #[error("already exists ({code}): {message}")]
    AlreadyExists { code: String, message: String },

    /// The service declined the request because the resource does not exist
    #[error("not found ({code}): {message}")]
    NotFound { code: String, message: String },

    /// Any other service-reported rejection, with its raw code and message
    #[error("service rejection ({code}): {message}")]
    Rejection { code: String, message: String },

    /// Network-level failure: timeout, connection reset, interrupted response
    #[error("transport failure: {0}")]
    Transport(String),

    /// Anything that fits none of the categories above
    #[error("unknown failure: {0}")]
    Unknown(String),
}

/// Result type alias for service actions
pub type ActionResult<T> = std::result::Result<T, ActionError>;

impl ActionError {
    /// Build a validation error from anything printable
    pub fn validation(message: impl Into<String>) -> Self {
        ActionError::Validation(message.into())
    }

    /// Classify a service rejection by its machine-readable code.
    ///
    /// Codes the caller can act on map to their own variants; everything else
    /// becomes a generic [`ActionError::Rejection`]. A rejection with no code
    /// at all cannot be branched on and is reported as unknown.
    pub fn from_rejection(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some(code) if ALREADY_EXISTS_CODES.contains(&code) => ActionError::AlreadyExists {
                code: code.to_string(),
                message,
            },
            Some(code) if NOT_FOUND_CODES.contains(&code) => ActionError::NotFound {
                code: code.to_string(),
                message,
            },
            Some(code) => ActionError::Rejection {
                code: code.to_string(),
                message,
            },
            None => ActionError::Unknown(message),
        }
    }

    /// Map an SDK error into the action taxonomy.
    ///
    /// This is the single boundary where remote failures enter the crate:
    /// service errors are classified by their error metadata, dispatch and
    /// timeout failures become [`ActionError::Transport`], and the rest is
    /// reported as unknown rather than swallowed.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
    {
        match err {
            SdkError::ServiceError(context) => {
                let err = context.into_err();
                let code = err.code().map(str::to_string);
                let message = err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                ActionError::from_rejection(code.as_deref(), message)
            }
            SdkError::TimeoutError(_) => {
                ActionError::Transport("request timed out before completing".to_string())
            }
            SdkError::DispatchFailure(failure) => {
                let detail = failure
                    .as_connector_error()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "failed to dispatch request".to_string());
                ActionError::Transport(detail)
            }
            SdkError::ResponseError(_) => {
                ActionError::Transport("connection failed while reading the response".to_string())
            }
            SdkError::ConstructionFailure(_) => {
                ActionError::Unknown("failed to construct the request".to_string())
            }
            other => ActionError::Unknown(other.to_string()),
        }
    }

    /// Returns true if this is a validation error (never reached the network)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }

    /// Returns true if the service reported the resource as already existing
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ActionError::AlreadyExists { .. })
    }

    /// Returns true if the service reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionError::NotFound { .. })
    }

    /// Returns true if this error is potentially retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, ActionError::Transport(_))
    }

    /// Short category name used in step reports and diagnostics
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            ActionError::Validation(_) => "validation",
            ActionError::AlreadyExists { .. } => "already-exists",
            ActionError::NotFound { .. } => "not-found",
            ActionError::Rejection { .. } => "rejection",
            ActionError::Transport(_) => "transport",
            ActionError::Unknown(_) => "unknown",
        }
    }
}
