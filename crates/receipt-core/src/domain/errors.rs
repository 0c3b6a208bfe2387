//! Error types for receipt processing

use super::entities::ReceiptId;
use thiserror::Error;

/// The first field that failed validation, with the rejected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed retailer: {0:?}")]
    Retailer(String),

    #[error("malformed purchase date: {0:?}")]
    PurchaseDate(String),

    #[error("malformed purchase time: {0:?}")]
    PurchaseTime(String),

    #[error("malformed total: {0:?}")]
    Total(String),

    #[error("malformed short description on item {index}: {value:?}")]
    ItemShortDescription { index: usize, value: String },

    #[error("malformed price on item {index}: {value:?}")]
    ItemPrice { index: usize, value: String },
}

impl ValidationError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Retailer(_) => "retailer",
            Self::PurchaseDate(_) => "purchaseDate",
            Self::PurchaseTime(_) => "purchaseTime",
            Self::Total(_) => "total",
            Self::ItemShortDescription { .. } => "shortDescription",
            Self::ItemPrice { .. } => "price",
        }
    }
}

/// Errors surfaced by the receipt service
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("receipt is invalid: {0}")]
    Invalid(#[from] ValidationError),

    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
}
