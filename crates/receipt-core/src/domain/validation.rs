//! Receipt field validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! retailer, purchase date, purchase time, total, then each item
//! (short description before price).
//!
//! All character classes are ASCII. Dates are checked for shape only, so
//! `2024-02-31` is accepted.

use super::entities::ReceiptSubmission;
use super::errors::ValidationError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Letters, digits, underscore, whitespace, `&` and `-`.
static TEXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_&\t\n\x0C\r -]+$").expect("Invalid regex pattern for text fields")
});

// Date and time are anchored at both ends, which is stricter than a
// substring match: `2022-01-015` and `13:01x` are rejected.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("Invalid regex pattern for purchase date")
});

/// Hour 00-24 inclusive, minute 00-59.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-4]):[0-5][0-9]$").expect("Invalid regex pattern for purchase time")
});

static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid regex pattern for money fields")
});

pub fn is_valid_text(value: &str) -> bool {
    TEXT_PATTERN.is_match(value)
}

pub fn is_valid_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

pub fn is_valid_time(value: &str) -> bool {
    TIME_PATTERN.is_match(value)
}

pub fn is_valid_money(value: &str) -> bool {
    MONEY_PATTERN.is_match(value)
}

/// Validate a submission, returning the first failing field.
pub fn validate(receipt: &ReceiptSubmission) -> Result<(), ValidationError> {
    check(receipt).inspect_err(|err| {
        debug!(field = err.field(), error = %err, "Receipt failed validation");
    })
}

fn check(receipt: &ReceiptSubmission) -> Result<(), ValidationError> {
    if !is_valid_text(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    if !is_valid_date(&receipt.purchase_date) {
        return Err(ValidationError::PurchaseDate(receipt.purchase_date.clone()));
    }

    if !is_valid_time(&receipt.purchase_time) {
        return Err(ValidationError::PurchaseTime(receipt.purchase_time.clone()));
    }

    if !is_valid_money(&receipt.total) {
        return Err(ValidationError::Total(receipt.total.clone()));
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !is_valid_text(&item.short_description) {
            return Err(ValidationError::ItemShortDescription {
                index,
                value: item.short_description.clone(),
            });
        }

        if !is_valid_money(&item.price) {
            return Err(ValidationError::ItemPrice {
                index,
                value: item.price.clone(),
            });
        }
    }

    Ok(())
}
