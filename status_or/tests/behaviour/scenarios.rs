//! Binds the `status_or` feature files to the step registry.

use crate::fixtures::{ContainerContext, container_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/status_or.feature",
    fixtures = [container_context: ContainerContext]
);
