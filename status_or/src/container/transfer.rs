//! Moving contents between containers.
//!
//! Every transfer leaves the donor failed with a `StatusCode::Invalid`
//! status whose message names the operation, whether the donor held a value
//! or a failure.

use std::mem;

use super::{State, StatusOr};
use crate::{ContractViolation, Status, StatusCode};

pub(crate) const VALUE_MOVED_BY_CONSTRUCTOR: &str = "Value moved by constructor";
pub(crate) const STATUS_MOVED_BY_CONSTRUCTOR: &str = "Status moved by constructor";
pub(crate) const VALUE_MOVED_BY_ASSIGNMENT: &str = "Value moved by move assignment";
pub(crate) const STATUS_MOVED_BY_ASSIGNMENT: &str = "Status moved by move assignment";
pub(crate) const VALUE_MOVED_BY_ACCESSOR: &str = "Value moved by value accessor";

impl<T> StatusOr<T> {
    /// Moves the contents into a new container, leaving `self` failed with
    /// a [`StatusCode::Invalid`] status.
    ///
    /// Assigning the result back to the donor restores it unchanged:
    ///
    /// ```
    /// use status_or::StatusOr;
    ///
    /// let mut held = StatusOr::new(String::from("x"));
    /// let moved = held.take();
    /// assert!(!held.is_ok());
    /// assert_eq!(moved.value(), "x");
    ///
    /// held = moved;
    /// held = held.take();
    /// assert_eq!(held.value(), "x");
    /// ```
    #[must_use = "the taken contents are dropped when the result is unused"]
    pub fn take(&mut self) -> Self {
        self.vacate(VALUE_MOVED_BY_CONSTRUCTOR, STATUS_MOVED_BY_CONSTRUCTOR)
    }

    /// Replaces the contents of `self` with those of `source`, dropping the
    /// old contents. `source` is left failed with a [`StatusCode::Invalid`]
    /// status.
    ///
    /// `self` and `source` can never be the same container:
    ///
    /// ```compile_fail
    /// use status_or::StatusOr;
    ///
    /// let mut held = StatusOr::new(1);
    /// held.move_assign(&mut held);
    /// ```
    pub fn move_assign(&mut self, source: &mut Self) {
        *self = source.vacate(VALUE_MOVED_BY_ASSIGNMENT, STATUS_MOVED_BY_ASSIGNMENT);
    }

    /// Moves the value out, leaving `self` failed with a
    /// [`StatusCode::Invalid`] status.
    ///
    /// # Panics
    ///
    /// Panics when the container holds no value. The held status is left in
    /// place.
    #[must_use = "the taken value is dropped when the result is unused"]
    #[track_caller]
    pub fn take_value(&mut self) -> T {
        match self.try_take_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Moves the value out, reporting its absence as an error.
    ///
    /// On error the container is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NoValue`] when the container holds no
    /// value.
    pub fn try_take_value(&mut self) -> Result<T, ContractViolation> {
        match self.replace_with_marker(VALUE_MOVED_BY_ACCESSOR) {
            State::Value(value) => Ok(value),
            State::Failed(status) => {
                self.state = State::Failed(status.clone());
                Err(ContractViolation::NoValue { status })
            }
        }
    }

    fn vacate(&mut self, value_marker: &'static str, status_marker: &'static str) -> Self {
        let marker = match &self.state {
            State::Value(_) => value_marker,
            State::Failed(status) => {
                note_consumed(status);
                status_marker
            }
        };
        Self {
            state: self.replace_with_marker(marker),
        }
    }

    fn replace_with_marker(&mut self, marker: &'static str) -> State<T> {
        mem::replace(&mut self.state, State::Failed(Status::moved(marker)))
    }
}

#[cfg(feature = "tracing")]
fn note_consumed(status: &Status) {
    if status.code() == StatusCode::Invalid {
        tracing::debug!(
            previous = status.message(),
            "moving out of an already consumed StatusOr"
        );
    }
}

#[cfg(not(feature = "tracing"))]
const fn note_consumed(_status: &Status) {}
