//! Scenario engine
//!
//! A scenario is an ordered sequence of labeled steps executed strictly in
//! order on a single logical thread. Steps hand values to later steps through
//! a [`ScenarioState`] map that lives only for the run. The first failing
//! step aborts the scenario; earlier side effects are not rolled back and the
//! report says exactly which step failed and why.
//!
//! Between steps the runner consults a [`Gate`]. The interactive CLI gate
//! asks the operator to continue; declining stops the scenario without
//! running further steps. Because the gate is a synchronous suspension point,
//! steps are never executed concurrently.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::context::AwsContext;
use crate::error::{ActionError, ActionResult};

/// In-memory values carried from earlier steps to later ones.
///
/// Nothing in here outlives the scenario run.
#[derive(Debug, Default)]
pub struct ScenarioState {
    values: BTreeMap<String, Value>,
}

impl ScenarioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Fetch a string value an earlier step was supposed to provide
    pub fn require_str(&self, key: &str) -> ActionResult<String> {
        self.get_str(key)
            .map(str::to_string)
            .ok_or_else(|| ActionError::validation(format!("scenario state is missing '{key}'")))
    }

    /// Fetch a value an earlier step was supposed to provide
    pub fn require(&self, key: &str) -> ActionResult<Value> {
        self.get(key)
            .cloned()
            .ok_or_else(|| ActionError::validation(format!("scenario state is missing '{key}'")))
    }
}

/// What a completed step hands back for reporting
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// Presented text for this step's result
    pub summary: String,
}

impl StepOutput {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

/// One labeled action invocation inside a scenario
#[async_trait]
pub trait Step: Send + Sync {
    /// Short human-readable label, used in gate prompts and reports
    fn label(&self) -> &str;

    /// Execute the step. Reads inputs from `state`, may write outputs for
    /// later steps, and returns the presented summary of its result.
    async fn run(&self, ctx: &AwsContext, state: &mut ScenarioState) -> ActionResult<StepOutput>;
}

/// Continue/stop decision point between steps
pub trait Gate: Send + Sync {
    fn confirm(&self, label: &str) -> bool;
}

/// Gate that always continues; used for `--yes` runs and tests
pub struct AutoApprove;

impl Gate for AutoApprove {
    fn confirm(&self, _label: &str) -> bool {
        true
    }
}

/// Cursor of the scenario runner
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioStatus {
    NotStarted,
    RunningStep(usize),
    Paused(usize),
    Aborted {
        step: usize,
        label: String,
        reason: String,
    },
    Completed,
}

/// Events surfaced to an observer while the scenario runs
#[derive(Debug)]
pub enum StepEvent<'a> {
    Started {
        index: usize,
        total: usize,
        label: &'a str,
    },
    Completed {
        index: usize,
        label: &'a str,
        summary: &'a str,
    },
    Cancelled {
        index: usize,
        label: &'a str,
    },
    Failed {
        index: usize,
        label: &'a str,
        reason: &'a str,
    },
}

/// Callback receiving [`StepEvent`]s as they happen
pub type StepObserver<'a> = &'a (dyn Fn(StepEvent<'_>) + Send + Sync);

/// Abort reason recorded when the operator declines the gate
pub const CANCELLED_BY_OPERATOR: &str = "cancelled by operator";

/// Report for one completed step
#[derive(Debug, Clone)]
pub struct StepReport {
    pub label: String,
    pub summary: String,
}

/// Final report of a scenario run
#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: String,
    pub status: ScenarioStatus,
    /// Reports of the steps that completed, in execution order
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ScenarioStatus::Completed)
    }

    /// True when the run stopped because the operator declined the gate
    pub fn cancelled(&self) -> bool {
        matches!(
            &self.status,
            ScenarioStatus::Aborted { reason, .. } if reason == CANCELLED_BY_OPERATOR
        )
    }

    /// The failing step's label and reason, when the scenario aborted
    pub fn failure(&self) -> Option<(&str, &str)> {
        match &self.status {
            ScenarioStatus::Aborted { label, reason, .. } => {
                Some((label.as_str(), reason.as_str()))
            }
            _ => None,
        }
    }
}

fn transition(status: &mut ScenarioStatus, next: ScenarioStatus) {
    trace!(from = ?status, to = ?next, "scenario transition");
    *status = next;
}

/// An ordered, named sequence of steps
pub struct Scenario {
    name: String,
    description: String,
    steps: Vec<Box<dyn Step>>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Run all steps in order without an observer
    pub async fn run(
        &self,
        ctx: &AwsContext,
        gate: &dyn Gate,
        state: &mut ScenarioState,
    ) -> ScenarioReport {
        self.run_with_observer(ctx, gate, state, None).await
    }

    /// Run all steps in order.
    ///
    /// The gate is consulted between steps (before every step after the
    /// first). The first step failure or gate decline ends the run; the
    /// returned report carries the terminal status and the reports of every
    /// step that completed.
    pub async fn run_with_observer(
        &self,
        ctx: &AwsContext,
        gate: &dyn Gate,
        state: &mut ScenarioState,
        observer: Option<StepObserver<'_>>,
    ) -> ScenarioReport {
        let total = self.steps.len();
        let mut status = ScenarioStatus::NotStarted;
        let mut reports = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            let label = step.label();

            if index > 0 {
                transition(&mut status, ScenarioStatus::Paused(index));
                if !gate.confirm(label) {
                    debug!("Scenario '{}' cancelled before step '{}'", self.name, label);
                    if let Some(observer) = observer {
                        observer(StepEvent::Cancelled { index, label });
                    }
                    transition(
                        &mut status,
                        ScenarioStatus::Aborted {
                            step: index,
                            label: label.to_string(),
                            reason: CANCELLED_BY_OPERATOR.to_string(),
                        },
                    );
                    return ScenarioReport {
                        scenario: self.name.clone(),
                        status,
                        steps: reports,
                    };
                }
            }

            transition(&mut status, ScenarioStatus::RunningStep(index));
            if let Some(observer) = observer {
                observer(StepEvent::Started {
                    index,
                    total,
                    label,
                });
            }

            match step.run(ctx, state).await {
                Ok(output) => {
                    if let Some(observer) = observer {
                        observer(StepEvent::Completed {
                            index,
                            label,
                            summary: &output.summary,
                        });
                    }
                    reports.push(StepReport {
                        label: label.to_string(),
                        summary: output.summary,
                    });
                }
                Err(err) => {
                    let reason = format!("{} [{}]", err, err.category());
                    debug!("Scenario '{}' aborted at '{}': {}", self.name, label, reason);
                    if let Some(observer) = observer {
                        observer(StepEvent::Failed {
                            index,
                            label,
                            reason: &reason,
                        });
                    }
                    transition(
                        &mut status,
                        ScenarioStatus::Aborted {
                            step: index,
                            label: label.to_string(),
                            reason,
                        },
                    );
                    return ScenarioReport {
                        scenario: self.name.clone(),
                        status,
                        steps: reports,
                    };
                }
            }
        }

        transition(&mut status, ScenarioStatus::Completed);
        ScenarioReport {
            scenario: self.name.clone(),
            status,
            steps: reports,
        }
    }
}
