//! Status-or-value container.
//!
//! [`StatusOr<T>`] holds either a successfully computed `T` or a non-ok
//! [`Status`] describing why there is none. Unlike a plain `Result`, a
//! container whose contents have been moved out stays observable: it reports
//! a [`StatusCode::Invalid`] status, distinct from the
//! [`StatusCode::Unknown`] status of a container that was never set.
//!
//! ```
//! use status_or::{Status, StatusCode, StatusOr};
//!
//! let mut first = StatusOr::new(String::from("x"));
//! let second = first.take();
//!
//! assert!(!first.is_ok());
//! assert_eq!(first.status().code(), StatusCode::Invalid);
//! assert_eq!(second.value(), "x");
//! ```
//!
//! Misuse (building a failed container from an ok status, or reading a value
//! that is not there) panics. Every panicking operation has a `try_*`
//! counterpart returning [`ContractViolation`].

mod container;
mod result_ext;
mod status;
mod violation;

pub use container::StatusOr;
pub use result_ext::{IntoStatus, StatusOrResultExt};
pub use status::{Status, StatusCode};
pub use violation::ContractViolation;
