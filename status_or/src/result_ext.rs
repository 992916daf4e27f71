//! Extensions for moving between `Result` and [`StatusOr`] concisely.
//!
//! These helpers reduce repetitive
//! `StatusOr::from_result(r.map_err(|e| Status::new(...)))` patterns when
//! adapting fallible APIs to the crate's container.
//!
//! - Use [`StatusOrResultExt::into_status_or`] for error types that already
//!   implement `Into<Status>`.
//! - Use [`IntoStatus::into_status`] to classify any other
//!   [`std::error::Error`] under a chosen [`StatusCode`].
//!
//! # Examples
//!
//! ```
//! use status_or::{IntoStatus, StatusCode, StatusOr, StatusOrResultExt};
//!
//! let parsed: StatusOr<u16> = "80"
//!     .parse::<u16>()
//!     .map_err(|err| err.into_status(StatusCode::InvalidArgument))
//!     .into_status_or();
//! assert_eq!(*parsed.value(), 80);
//! ```

use crate::{Status, StatusCode, StatusOr};

/// Maps any `Result<T, E>` with `E: Into<Status>` into a [`StatusOr<T>`].
pub trait StatusOrResultExt<T, E> {
    /// Convert `Result<T, E>` into `StatusOr<T>` using `Into<Status>`.
    ///
    /// # Panics
    ///
    /// Panics when the error converts into an ok status.
    fn into_status_or(self) -> StatusOr<T>;
}

impl<T, E> StatusOrResultExt<T, E> for Result<T, E>
where
    E: Into<Status>,
{
    #[track_caller]
    fn into_status_or(self) -> StatusOr<T> {
        StatusOr::from_result(self.map_err(Into::into))
    }
}

/// Classifies an error as a [`Status`] with a chosen code.
pub trait IntoStatus {
    /// Builds a status with `code` and the error's display text as message.
    ///
    /// A [`StatusCode::Ok`] code is replaced with [`StatusCode::Unknown`]: an
    /// error never maps to success.
    ///
    /// [`Status`] is itself an error, so calling this on a status wraps it:
    /// the new message is the old status's display text (`CODE: message`).
    /// Pass statuses through [`StatusOrResultExt::into_status_or`] instead.
    fn into_status(self, code: StatusCode) -> Status;
}

impl<E> IntoStatus for E
where
    E: std::error::Error,
{
    fn into_status(self, code: StatusCode) -> Status {
        let code = if code.is_ok() {
            StatusCode::Unknown
        } else {
            code
        };
        Status::new(code, self.to_string())
    }
}
