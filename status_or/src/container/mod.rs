//! The [`StatusOr`] container.
//!
//! A `StatusOr<T>` holds either a `T` or a non-ok [`Status`]; never both and
//! never neither. Construction, copying and querying never fail. Moving the
//! contents out through [`StatusOr::take`], [`StatusOr::move_assign`] or
//! [`StatusOr::take_value`] leaves the donor holding a
//! [`StatusCode::Invalid`](crate::StatusCode::Invalid) status, so a consumed
//! container is distinguishable from one that was never initialised
//! ([`StatusCode::Unknown`](crate::StatusCode::Unknown)).

mod access;
mod transfer;

use std::fmt;

use crate::{ContractViolation, Status};

/// Either a successfully computed `T` or the [`Status`] explaining why there
/// is none.
///
/// # Examples
///
/// ```
/// use status_or::{Status, StatusCode, StatusOr};
///
/// let answer = StatusOr::new(42);
/// assert!(answer.is_ok());
/// assert_eq!(*answer.value(), 42);
///
/// let failed: StatusOr<i32> = StatusOr::from_status(Status::invalid_argument("bad"));
/// assert!(!failed.is_ok());
/// assert_eq!(failed.status().message(), "bad");
///
/// let unset: StatusOr<i32> = StatusOr::default();
/// assert_eq!(unset.status().code(), StatusCode::Unknown);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StatusOr<T> {
    state: State<T>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Value(T),
    Failed(Status),
}

impl<T> StatusOr<T> {
    /// Wraps a successfully computed value.
    ///
    /// `T` needs neither `Default` nor `Clone`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Builds a failed container holding `status`.
    ///
    /// # Panics
    ///
    /// Panics when `status` is ok: an ok container must carry a value. Use
    /// [`StatusOr::try_from_status`] to handle that case without panicking.
    #[must_use]
    #[track_caller]
    pub fn from_status(status: Status) -> Self {
        match Self::try_from_status(status) {
            Ok(failed) => failed,
            Err(violation) => violation.raise(),
        }
    }

    /// Builds a failed container holding `status`, rejecting ok statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::OkStatus`] when `status` is ok.
    pub fn try_from_status(status: Status) -> Result<Self, ContractViolation> {
        if status.is_ok() {
            return Err(ContractViolation::OkStatus);
        }
        Ok(Self {
            state: State::Failed(status),
        })
    }

    /// Builds a container from a `Result`.
    ///
    /// # Panics
    ///
    /// Panics when `result` is `Err` carrying an ok status.
    #[must_use]
    #[track_caller]
    pub fn from_result(result: Result<T, Status>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(status) => Self::from_status(status),
        }
    }

    /// Builds a `StatusOr<T>` from a `StatusOr<U>` whose value converts
    /// into `T`. Failures carry over unchanged.
    ///
    /// ```
    /// use status_or::StatusOr;
    ///
    /// let narrow = StatusOr::new(7_u8);
    /// let wide: StatusOr<u32> = StatusOr::convert(narrow);
    /// assert_eq!(*wide.value(), 7);
    /// ```
    #[must_use]
    pub fn convert<U>(other: StatusOr<U>) -> Self
    where
        U: Into<T>,
    {
        other.map(Into::into)
    }
}

impl<T> Default for StatusOr<T> {
    /// A failed container with the default [`StatusCode::Unknown`](crate::StatusCode::Unknown) status.
    fn default() -> Self {
        Self {
            state: State::Failed(Status::default()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StatusOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f.debug_tuple("StatusOr::Value").field(value).finish(),
            State::Failed(status) => f.debug_tuple("StatusOr::Failed").field(status).finish(),
        }
    }
}

impl<T> From<StatusOr<T>> for Result<T, Status> {
    fn from(value: StatusOr<T>) -> Self {
        value.into_result()
    }
}
