//! Receipt Service
//!
//! Orchestrates validation, id generation, storage, and scoring.

use crate::domain::{points, validation, Receipt, ReceiptError, ReceiptId, ReceiptSubmission};
use crate::ports::{ReceiptProcessorApi, ReceiptStore};
use std::sync::Arc;
use tracing::{debug, info};

/// Receipt Service implementation
///
/// Implements the `ReceiptProcessorApi` port using an injected store.
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }
}

impl ReceiptProcessorApi for ReceiptService {
    fn process(&self, submission: ReceiptSubmission) -> Result<ReceiptId, ReceiptError> {
        validation::validate(&submission)?;

        let id = ReceiptId::generate();
        let receipt = Receipt::from_submission(id.clone(), submission);
        self.store.put(receipt);

        info!(receipt_id = %id, "Receipt stored");
        Ok(id)
    }

    fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptError> {
        let receipt = self
            .store
            .get(id)
            .ok_or_else(|| ReceiptError::NotFound(id.clone()))?;

        let breakdown = points::breakdown(&receipt);
        let total = breakdown.total();
        debug!(
            receipt_id = %id,
            retailer = breakdown.retailer,
            round_dollar = breakdown.round_dollar,
            quarter_multiple = breakdown.quarter_multiple,
            item_pairs = breakdown.item_pairs,
            descriptions = breakdown.descriptions,
            odd_day = breakdown.odd_day,
            afternoon = breakdown.afternoon,
            total,
            "Scored receipt"
        );

        Ok(total)
    }

    fn receipt_count(&self) -> usize {
        self.store.len()
    }
}
