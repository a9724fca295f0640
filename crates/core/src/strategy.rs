//! Policies deciding whether a scenario runs again.

use log::warn;

use crate::scenario::Scenario;

/// Consulted by the runner after every iteration of a scenario, failed or not.
pub trait ExecutionStrategy {
    /// Returns `true` when the scenario should not run again.
    fn is_scenario_complete(&self, scenario: &dyn Scenario) -> bool;
}

/// Asks the user whether to run the scenario again.
///
/// Installed by [`ScenarioBase::new`](crate::scenario::ScenarioBase::new).
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptStrategy;

impl ExecutionStrategy for PromptStrategy {
    fn is_scenario_complete(&self, scenario: &dyn Scenario) -> bool {
        let prompt = format!("Run `{}` again?", scenario.title());

        match scenario.context().console().confirm(&prompt) {
            Ok(again) => !again,
            Err(e) => {
                warn!("Could not ask whether to repeat `{}`: {e}", scenario.title());
                true
            }
        }
    }
}

/// Runs a scenario exactly once. Used for batch runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglePassStrategy;

impl ExecutionStrategy for SinglePassStrategy {
    fn is_scenario_complete(&self, _scenario: &dyn Scenario) -> bool {
        true
    }
}
