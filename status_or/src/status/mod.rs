//! Failure descriptors carried by [`StatusOr`](crate::StatusOr).

mod code;
mod types;

pub use code::StatusCode;
pub use types::Status;
