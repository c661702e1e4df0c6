//! # awsctl-core
//!
//! Engine layer for the `awsctl` CLI: configuration profiles, a memoized
//! service-client provider, typed DynamoDB and S3 actions, a sequential
//! scenario runner, and pure result presentation.
//!
//! The layering mirrors how the CLI consumes it:
//!
//! 1. [`config`] resolves a named profile,
//! 2. [`context`] turns it into an [`context::AwsContext`] holding cached
//!    service clients,
//! 3. [`dynamodb`] / [`s3`] expose one validated action per remote operation,
//! 4. [`scenario`] sequences actions into guided workflows, and
//! 5. [`present`] renders the simplified results as text.
//!
//! Every action reports failure through [`error::ActionError`], a tagged
//! union the caller can pattern-match instead of inspecting exception
//! hierarchies or raw strings.

pub mod config;
pub mod context;
pub mod dynamodb;
pub mod error;
pub mod present;
pub mod progress;
pub mod s3;
pub mod scenario;
pub mod scenarios;

pub use config::{Config, ConfigError, Profile};
pub use context::AwsContext;
pub use error::{ActionError, ActionResult};
pub use progress::{ProgressCallback, ProgressEvent};
pub use scenario::{
    AutoApprove, Gate, Scenario, ScenarioReport, ScenarioState, ScenarioStatus, Step, StepEvent,
    StepObserver, StepOutput, StepReport,
};
pub use scenarios::ScenarioRegistry;
