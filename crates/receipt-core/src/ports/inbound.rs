//! Inbound Ports (Driving Ports)
//!
//! The API that the HTTP gateway uses to submit and score receipts.

use crate::domain::{ReceiptError, ReceiptId, ReceiptSubmission};

/// Primary receipt processing API (Driving Port)
pub trait ReceiptProcessorApi: Send + Sync {
    /// Validate a submission, assign it an identifier, and store it.
    ///
    /// Nothing is stored when validation fails.
    fn process(&self, submission: ReceiptSubmission) -> Result<ReceiptId, ReceiptError>;

    /// Score a previously stored receipt.
    ///
    /// Returns `ReceiptError::NotFound` when the id was never issued.
    fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptError>;

    /// Number of stored receipts.
    fn receipt_count(&self) -> usize;
}
