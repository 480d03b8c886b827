// 🧾 Validation - Raw submission → typed receipt fields
// Every check matches the WHOLE input; first failure wins
//
// Raw payloads arrive with every field as a string. Nothing here performs I/O,
// so the whole module is a set of pure functions over call-local data.

use crate::money::Cents;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// PATTERNS
// ============================================================================
// Letter/digit/whitespace classes are ASCII on purpose.

static RETAILER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\x0C\r &-]+$").expect("retailer pattern is valid")
});

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\x0C\r -]+$").expect("description pattern is valid")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern is valid"));

// ============================================================================
// RAW PAYLOAD
// ============================================================================

/// Submission body exactly as the client sent it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    pub retailer: String,

    /// `YYYY-MM-DD`
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,

    pub items: Vec<RawItem>,

    /// `D.CC`
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub short_description: String,
    pub price: String,
}

// ============================================================================
// VALIDATED VALUES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Kept verbatim, surrounding whitespace included
    pub short_description: String,
    pub price: Cents,
}

/// Receipt fields that passed every check, ready for scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedReceipt {
    pub retailer: String,
    /// Seconds are always zero
    pub purchased_at: NaiveDateTime,
    pub items: Vec<Item>,
    pub total: Cents,
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid retailer")]
    InvalidRetailer,

    #[error("Invalid purchaseDate or purchaseTime")]
    InvalidPurchaseDateTime,

    #[error("Receipt must contain at least one item")]
    NoItems,

    #[error("Invalid shortDescription")]
    InvalidItemDescription,

    #[error("Invalid price")]
    InvalidPrice,

    #[error("Invalid total")]
    InvalidTotal,
}

impl ValidationError {
    /// Name of the offending field in the submission payload
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidRetailer => "retailer",
            ValidationError::InvalidPurchaseDateTime => "purchaseDate",
            ValidationError::NoItems => "items",
            ValidationError::InvalidItemDescription => "shortDescription",
            ValidationError::InvalidPrice => "price",
            ValidationError::InvalidTotal => "total",
        }
    }
}

// ============================================================================
// FIELD CHECKS
// ============================================================================

pub fn validate_retailer(raw: &str) -> Result<String, ValidationError> {
    if RETAILER_RE.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::InvalidRetailer)
    }
}

/// Combine `YYYY-MM-DD` and `HH:MM` into one timestamp. No timezone applied.
pub fn validate_purchase_datetime(date: &str, time: &str) -> Result<NaiveDateTime, ValidationError> {
    if !DATE_RE.is_match(date) || !TIME_RE.is_match(time) {
        return Err(ValidationError::InvalidPurchaseDateTime);
    }

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidPurchaseDateTime)?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ValidationError::InvalidPurchaseDateTime)?;

    Ok(NaiveDateTime::new(date, time))
}

pub fn validate_price(raw: &str) -> Result<Cents, ValidationError> {
    Cents::parse(raw).ok_or(ValidationError::InvalidPrice)
}

pub fn validate_total(raw: &str) -> Result<Cents, ValidationError> {
    Cents::parse(raw).ok_or(ValidationError::InvalidTotal)
}

pub fn validate_item(raw: &RawItem) -> Result<Item, ValidationError> {
    let description = &raw.short_description;
    if !DESCRIPTION_RE.is_match(description) || description.trim().is_empty() {
        return Err(ValidationError::InvalidItemDescription);
    }

    Ok(Item {
        short_description: description.clone(),
        price: validate_price(&raw.price)?,
    })
}

/// Validate a whole submission.
///
/// Order: retailer, purchase date/time, items (in submission order), total.
/// Stops at the first failure; no partial receipt is ever returned.
pub fn validate_receipt(raw: &RawReceipt) -> Result<ValidatedReceipt, ValidationError> {
    let retailer = validate_retailer(&raw.retailer)?;
    let purchased_at = validate_purchase_datetime(&raw.purchase_date, &raw.purchase_time)?;

    if raw.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let items = raw
        .items
        .iter()
        .map(validate_item)
        .collect::<Result<Vec<_>, _>>()?;

    let total = validate_total(&raw.total)?;

    Ok(ValidatedReceipt {
        retailer,
        purchased_at,
        items,
        total,
    })
}

// ============================================================================
// TESTS
// ============================================================================
