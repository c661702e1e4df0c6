//! Built-in scenarios
//!
//! Each scenario demonstrates an end-to-end workflow against one service,
//! composed from the typed actions in this crate. Scenarios read their
//! required inputs from [`crate::scenario::ScenarioState`]; the CLI seeds the
//! state from command-line arguments before running.

mod dynamodb_getting_started;
mod s3_getting_started;

use crate::scenario::Scenario;

type Builder = fn() -> Scenario;

const SCENARIOS: &[(&str, &str, Builder)] = &[
    (
        "dynamodb-getting-started",
        "Create a table, wait for it to become active, write and read an item, query, then clean up",
        dynamodb_getting_started::build,
    ),
    (
        "s3-getting-started",
        "Create a bucket, upload an object, list and download it, then clean up",
        s3_getting_started::build,
    ),
];

/// Registry of built-in scenarios, addressed by name
#[derive(Default)]
pub struct ScenarioRegistry;

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All registered scenarios as (name, description) pairs
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        SCENARIOS
            .iter()
            .map(|(name, description, _)| (*name, *description))
            .collect()
    }

    /// Build a scenario by name
    pub fn build(&self, name: &str) -> Option<Scenario> {
        SCENARIOS
            .iter()
            .find(|(candidate, _, _)| *candidate == name)
            .map(|(_, _, builder)| builder())
    }
}
