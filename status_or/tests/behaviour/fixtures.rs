//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use status_or::StatusOr;

/// Scenario state shared between container steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ContainerContext {
    /// Integer container used by the construction scenarios.
    pub number: Slot<StatusOr<i32>>,
    /// The container most steps act on.
    pub first: Slot<StatusOr<String>>,
    /// Destination of copies and moves.
    pub second: Slot<StatusOr<String>>,
    /// Value moved out of `first`.
    pub extracted: Slot<String>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn container_context() -> ContainerContext {
    ContainerContext::default()
}
