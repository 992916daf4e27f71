//! Matchers over anything that reports an ok/not-ok status.
//!
//! The `expect_*` helpers return `anyhow::Result` so behavioural steps can
//! propagate mismatches with `?`.
//!
//! # Examples
//!
//! ```
//! use status_or::{Status, StatusOr};
//! use test_helpers::matchers::{IsOk, expect_ok};
//!
//! let held = StatusOr::new(1);
//! assert!(held.reports_ok());
//! expect_ok(&held).expect("held value");
//! assert!(!Status::default().reports_ok());
//! ```

use anyhow::{Result, ensure};
use status_or::{Status, StatusCode, StatusOr};

/// Anything exposing an ok flag and a status.
pub trait IsOk {
    /// Whether the subject reports success.
    fn reports_ok(&self) -> bool;

    /// The subject's current status.
    fn current_status(&self) -> Status;
}

impl IsOk for Status {
    fn reports_ok(&self) -> bool {
        self.is_ok()
    }

    fn current_status(&self) -> Status {
        self.clone()
    }
}

impl<T> IsOk for StatusOr<T> {
    fn reports_ok(&self) -> bool {
        self.is_ok()
    }

    fn current_status(&self) -> Status {
        self.status()
    }
}

/// Fails unless `subject` reports success.
///
/// # Errors
///
/// Returns an error naming the held status when `subject` is not ok.
pub fn expect_ok<S: IsOk + ?Sized>(subject: &S) -> Result<()> {
    ensure!(
        subject.reports_ok(),
        "expected ok, got {}",
        subject.current_status()
    );
    Ok(())
}

/// Fails unless `subject` reports failure with `code`.
///
/// # Errors
///
/// Returns an error when `subject` is ok or carries a different code.
pub fn expect_code<S: IsOk + ?Sized>(subject: &S, code: StatusCode) -> Result<()> {
    ensure!(!subject.reports_ok(), "expected {code}, got OK");
    let status = subject.current_status();
    ensure!(status.code() == code, "expected {code}, got {status}");
    Ok(())
}

/// Fails unless `subject` reports exactly `expected`.
///
/// # Errors
///
/// Returns an error when the statuses differ in code or message.
pub fn expect_status<S: IsOk + ?Sized>(subject: &S, expected: &Status) -> Result<()> {
    let status = subject.current_status();
    ensure!(&status == expected, "expected {expected}, got {status}");
    Ok(())
}

/// Fails unless `subject` carries the moved-from marker.
///
/// # Errors
///
/// Returns an error when `subject` is ok or its code is not
/// [`StatusCode::Invalid`].
pub fn expect_moved<S: IsOk + ?Sized>(subject: &S) -> Result<()> {
    expect_code(subject, StatusCode::Invalid)
}
