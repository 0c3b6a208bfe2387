//! Receipt entities.
//!
//! `ReceiptSubmission` is the caller-facing payload; `Receipt` is what the
//! store holds once the submission has passed validation and received an id.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque receipt identifier, assigned at creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt as submitted by a caller, before it has an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    /// Absent or `null` reads as no items.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    pub total: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated, stored receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: ReceiptId,
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Receipt {
    /// Attach an identifier to a submission.
    pub fn from_submission(id: ReceiptId, submission: ReceiptSubmission) -> Self {
        Self {
            id,
            retailer: submission.retailer,
            purchase_date: submission.purchase_date,
            purchase_time: submission.purchase_time,
            items: submission.items,
            total: submission.total,
        }
    }
}
