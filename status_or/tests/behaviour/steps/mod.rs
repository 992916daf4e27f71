//! Step definitions for the container scenarios.

mod construction_steps;
mod transfer_steps;
