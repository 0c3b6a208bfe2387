//! Outbound Ports (Driven Ports)
//!
//! Storage the receipt service depends on. Implementations synchronize
//! internally; callers never lock.

use crate::domain::{Receipt, ReceiptId};

/// Receipt storage (Driven Port)
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under its id, replacing any existing entry.
    fn put(&self, receipt: Receipt);

    /// Fetch a copy of the receipt stored under `id`.
    fn get(&self, id: &ReceiptId) -> Option<Receipt>;

    /// Number of stored receipts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
