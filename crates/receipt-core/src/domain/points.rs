//! Reward-points rules.
//!
//! Every rule is independent and additive. A rule whose input cannot be
//! parsed contributes zero; scoring a stored receipt never fails.

use super::entities::{Item, Receipt};
use serde::Serialize;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const AFTERNOON_POINTS: u64 = 10;
pub const ODD_DAY_POINTS: u64 = 6;

/// Description-length rule multiplier applied to the item price.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Afternoon window as `HHMM`, exclusive on both ends.
const AFTERNOON_START: u32 = 1400;
const AFTERNOON_END: u32 = 1600;

/// Per-rule contributions for one receipt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Compute every rule's contribution.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(&receipt.items),
        descriptions: description_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// Total score for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// One point per letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn cents(total: &str) -> Option<&str> {
    total.split_once('.').map(|(_, fraction)| fraction)
}

pub fn round_dollar_points(total: &str) -> u64 {
    match cents(total) {
        Some("00") => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

pub fn quarter_multiple_points(total: &str) -> u64 {
    match cents(total).and_then(|c| c.parse::<u32>().ok()) {
        Some(value) if value % 25 == 0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// Sum of `ceil(price * 0.2)` over items whose trimmed description length
/// is a multiple of three.
///
/// Prices have no upper bound, so the sum saturates instead of overflowing.
pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(description_points_for_item)
        .fold(0, u64::saturating_add)
}

fn description_points_for_item(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % 3 != 0 {
        return 0;
    }

    let Ok(price) = item.price.parse::<f64>() else {
        return 0;
    };

    let rounded = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}

/// Six points when the day of month (`YYYY-MM-DD`, positions 9-10) is odd.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.get(8..10).and_then(|d| d.parse::<u32>().ok()) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Ten points for purchases strictly after 14:00 and strictly before 16:00.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    match purchase_time.replace(':', "").parse::<u32>() {
        Ok(hhmm) if AFTERNOON_START < hhmm && hhmm < AFTERNOON_END => AFTERNOON_POINTS,
        _ => 0,
    }
}
