//! In-memory receipt store.
//!
//! Implements the `ReceiptStore` port with a `HashMap` behind a
//! `parking_lot::RwLock`. Nothing survives a restart.

use crate::domain::{Receipt, ReceiptId};
use crate::ports::outbound::ReceiptStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Process-lifetime receipt storage.
#[derive(Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) {
        let id = receipt.id.clone();
        let previous = self.receipts.write().insert(id.clone(), receipt);
        if previous.is_some() {
            debug!(receipt_id = %id, "Overwrote existing receipt");
        }
    }

    fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.receipts.read().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.receipts.read().len()
    }
}
