//! Read access and consuming accessors.

use super::{State, StatusOr};
use crate::{ContractViolation, Status};

impl<T> StatusOr<T> {
    /// Returns `true` when the container holds a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// The current status: [`Status::ok`] when a value is held, the stored
    /// failure otherwise.
    #[must_use]
    pub fn status(&self) -> Status {
        match &self.state {
            State::Value(_) => Status::ok(),
            State::Failed(status) => status.clone(),
        }
    }

    /// Borrows the stored failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&Status> {
        match &self.state {
            State::Value(_) => None,
            State::Failed(status) => Some(status),
        }
    }

    /// Borrows the value, if any.
    #[must_use]
    pub const fn ok(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Panics when the container holds no value. Check [`StatusOr::is_ok`]
    /// first or use [`StatusOr::try_value`].
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Value(value) => value,
            State::Failed(status) => no_value(status),
        }
    }

    /// Mutably borrows the value.
    ///
    /// # Panics
    ///
    /// Panics when the container holds no value.
    #[must_use]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Value(value) => value,
            State::Failed(status) => no_value(status),
        }
    }

    /// Borrows the value, reporting its absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NoValue`] with the held status when the
    /// container holds no value.
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Failed(status) => Err(ContractViolation::NoValue {
                status: status.clone(),
            }),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// The compiler rejects any later use of the consumed container:
    ///
    /// ```compile_fail
    /// use status_or::StatusOr;
    ///
    /// let held = StatusOr::new(String::from("x"));
    /// let value = held.into_value();
    /// assert!(held.is_ok());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the container holds no value.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Value(value) => value,
            State::Failed(status) => no_value(&status),
        }
    }

    /// Consumes the container, reporting a missing value as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NoValue`] when the container holds no
    /// value.
    pub fn try_into_value(self) -> Result<T, ContractViolation> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failed(status) => Err(ContractViolation::NoValue { status }),
        }
    }

    /// Returns the value, or `default` when there is none.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self.state {
            State::Value(value) => value,
            State::Failed(_) => default,
        }
    }

    /// Returns the value, or computes one from the held status.
    #[must_use]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Status) -> T,
    {
        match self.state {
            State::Value(value) => value,
            State::Failed(status) => fallback(status),
        }
    }

    /// Converts into a `Result`, for use with `?`.
    ///
    /// ```
    /// use status_or::{Status, StatusOr};
    ///
    /// fn double(input: StatusOr<i32>) -> Result<i32, Status> {
    ///     let value = input.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(StatusOr::new(21)), Ok(42));
    /// assert!(double(StatusOr::from_status(Status::internal("boom"))).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the held status when there is no value.
    pub fn into_result(self) -> Result<T, Status> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failed(status) => Err(status),
        }
    }

    /// Borrows the contents as a `StatusOr<&T>`. A failure is cloned.
    #[must_use]
    pub fn as_status_or_ref(&self) -> StatusOr<&T> {
        StatusOr {
            state: match &self.state {
                State::Value(value) => State::Value(value),
                State::Failed(status) => State::Failed(status.clone()),
            },
        }
    }

    /// Applies `op` to the value, carrying a failure over unchanged.
    #[must_use]
    pub fn map<U, F>(self, op: F) -> StatusOr<U>
    where
        F: FnOnce(T) -> U,
    {
        StatusOr {
            state: match self.state {
                State::Value(value) => State::Value(op(value)),
                State::Failed(status) => State::Failed(status),
            },
        }
    }

    /// Chains a computation that may itself fail.
    #[must_use]
    pub fn and_then<U, F>(self, op: F) -> StatusOr<U>
    where
        F: FnOnce(T) -> StatusOr<U>,
    {
        match self.state {
            State::Value(value) => op(value),
            State::Failed(status) => StatusOr {
                state: State::Failed(status),
            },
        }
    }
}

#[track_caller]
fn no_value(status: &Status) -> ! {
    ContractViolation::NoValue {
        status: status.clone(),
    }
    .raise()
}
