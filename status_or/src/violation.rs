//! Programmer errors detected by [`StatusOr`](crate::StatusOr).

use thiserror::Error;

use crate::Status;

/// Misuse of a [`StatusOr`](crate::StatusOr).
///
/// The panicking constructors and accessors panic with this error's display
/// text; the `try_*` forms return it instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A failed container was requested with an ok status.
    #[error("cannot build a failed StatusOr from an OK status")]
    OkStatus,

    /// The value was requested from a container that holds none.
    #[error("StatusOr holds no value: {status}")]
    NoValue {
        /// Status held by the container at the time of the request.
        status: Status,
    },
}

impl ContractViolation {
    /// Logs the violation and panics with its message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        self.log();
        panic!("{self}")
    }

    #[cfg(feature = "tracing")]
    fn log(&self) {
        match self {
            Self::OkStatus => tracing::error!("StatusOr constructed from an OK status"),
            Self::NoValue { status } => tracing::error!(
                code = %status.code(),
                message = status.message(),
                "value requested from a StatusOr without one"
            ),
        }
    }

    #[cfg(not(feature = "tracing"))]
    const fn log(&self) {
        let _ = self;
    }
}
