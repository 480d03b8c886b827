// 🏆 Points Calculator - Fixed reward rules
// Pure function of (retailer, purchase timestamp, items, total)

use crate::money::Cents;
use crate::validation::{Item, ValidatedReceipt};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

// ============================================================================
// RULE CONSTANTS
// ============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Hours (24h clock) that earn the afternoon bonus: 14:00 through 15:59
const AFTERNOON_HOURS: [u32; 2] = [14, 15];

/// price * 0.2 in dollars == cents / 500 in points
const CENTS_PER_DESCRIPTION_POINT: u64 = 500;

// ============================================================================
// BREAKDOWN
// ============================================================================

/// Contribution of every rule, kept apart so callers can explain a score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// One point per ASCII letter or digit in the retailer name
    pub retailer_name: u64,
    /// Total has no cents
    pub round_dollar_total: u64,
    /// Total is a multiple of 0.25
    pub quarter_multiple_total: u64,
    /// Five points per two items
    pub item_pairs: u64,
    /// Items whose trimmed description length is a multiple of 3
    pub item_descriptions: u64,
    /// Day of month is odd
    pub odd_purchase_day: u64,
    /// Purchased between 14:00 and 15:59
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &ValidatedReceipt) -> Self {
        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: if receipt.total.is_multiple_of(100) {
                ROUND_DOLLAR_POINTS
            } else {
                0
            },
            quarter_multiple_total: if receipt.total.is_multiple_of(25) {
                QUARTER_MULTIPLE_POINTS
            } else {
                0
            },
            item_pairs: (receipt.items.len() as u64 / 2) * POINTS_PER_ITEM_PAIR,
            item_descriptions: receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            odd_purchase_day: if receipt.purchased_at.day() % 2 == 1 {
                ODD_DAY_POINTS
            } else {
                0
            },
            afternoon_purchase: if AFTERNOON_HOURS.contains(&receipt.purchased_at.hour()) {
                AFTERNOON_POINTS
            } else {
                0
            },
        }
    }

    /// Saturates at `u64::MAX` for absurdly large amounts
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Score a validated receipt. Never fails.
pub fn calculate_points(receipt: &ValidatedReceipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// ============================================================================
// RULE HELPERS
// ============================================================================

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

fn item_description_points(item: &Item) -> u64 {
    // Descriptions are ASCII once validated, so byte length == char count
    if item.short_description.trim().len() % 3 == 0 {
        price_fifth_rounded_up(item.price)
    } else {
        0
    }
}

/// ceil(price * 0.2), computed exactly on cents
fn price_fifth_rounded_up(price: Cents) -> u64 {
    price.value().div_ceil(CENTS_PER_DESCRIPTION_POINT)
}

// ============================================================================
// TESTS
// ============================================================================
