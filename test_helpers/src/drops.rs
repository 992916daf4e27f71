//! Drop accounting for payload lifecycle tests.
//!
//! A [`DropLedger`] hands out [`Tracked`] payloads and records each one's id
//! when it is dropped, so tests can assert a payload was released exactly
//! once and that moved-from containers release nothing.
//!
//! # Examples
//!
//! ```
//! use test_helpers::drops::DropLedger;
//!
//! let ledger = DropLedger::default();
//! let payload = ledger.track(7);
//! drop(payload);
//! assert_eq!(ledger.drops_of(7), 1);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared record of dropped payload ids.
#[derive(Debug, Clone, Default)]
pub struct DropLedger {
    dropped: Arc<Mutex<Vec<u32>>>,
}

impl DropLedger {
    /// Creates a payload with `id` that reports to this ledger on drop.
    #[must_use]
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            ledger: self.clone(),
        }
    }

    /// Number of times a payload with `id` has been dropped.
    #[must_use]
    pub fn drops_of(&self, id: u32) -> usize {
        self.dropped.lock().iter().filter(|seen| **seen == id).count()
    }

    /// Total number of drops recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.dropped.lock().len()
    }

    fn record(&self, id: u32) {
        self.dropped.lock().push(id);
    }
}

/// A payload that records its id in a [`DropLedger`] when dropped.
///
/// Clones share the id, so a deep copy shows up as a second drop of the same
/// id.
#[derive(Debug)]
pub struct Tracked {
    id: u32,
    ledger: DropLedger,
}

impl Tracked {
    /// The payload id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.track(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.record(self.id);
    }
}
