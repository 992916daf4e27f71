//! The [`Status`] failure descriptor.

use std::fmt;

use super::StatusCode;

/// Outcome descriptor: a [`StatusCode`] plus a human-readable message.
///
/// A default-constructed status is non-ok with [`StatusCode::Unknown`]. An
/// ok status never carries a message.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    code: StatusCode,
    message: String,
}

impl Status {
    /// Builds a status with the given code and message.
    ///
    /// Any message supplied alongside [`StatusCode::Ok`] is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_or::{Status, StatusCode};
    ///
    /// let status = Status::new(StatusCode::InvalidArgument, "bad");
    /// assert_eq!(status.code(), StatusCode::InvalidArgument);
    /// assert_eq!(status.message(), "bad");
    ///
    /// assert_eq!(Status::new(StatusCode::Ok, "ignored"), Status::ok());
    /// ```
    #[must_use]
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        let message = if code.is_ok() {
            String::new()
        } else {
            message.into()
        };
        Self { code, message }
    }

    /// The ok status.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            code: StatusCode::Ok,
            message: String::new(),
        }
    }

    /// A [`StatusCode::Unknown`] status with the given message.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unknown, message)
    }

    /// A [`StatusCode::InvalidArgument`] status with the given message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InvalidArgument, message)
    }

    /// A [`StatusCode::NotFound`] status with the given message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    /// A [`StatusCode::FailedPrecondition`] status with the given message.
    #[must_use]
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FailedPrecondition, message)
    }

    /// A [`StatusCode::Internal`] status with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Internal, message)
    }

    /// The marker left behind in a container whose contents were moved out.
    pub(crate) fn moved(message: &'static str) -> Self {
        Self {
            code: StatusCode::Invalid,
            message: message.to_owned(),
        }
    }

    /// The status code.
    #[must_use]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// The message; empty for ok statuses.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the code is [`StatusCode::Ok`].
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str(self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Status {}
