//! Test helpers shared across crates.
//!
//! This crate provides status matchers, sample element types for exercising
//! `StatusOr<T>` with awkward payloads, and a drop ledger for checking that
//! payloads are released exactly once.

pub mod drops;
pub mod elements;
pub mod matchers;

pub use matchers::IsOk;
