// 🧾 Receipt Entity - Identity + scored values
//
// The id is IDENTITY (assigned once, never reused); everything else is a VALUE
// fixed at submission time. Points are computed once here and never again.

use crate::money::Cents;
use crate::points::calculate_points;
use crate::validation::{validate_receipt, Item, RawReceipt, ValidatedReceipt, ValidationError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Stable identity - NEVER changes
    pub id: Uuid,

    pub retailer: String,
    pub purchased_at: NaiveDateTime,
    pub items: Vec<Item>,
    pub total: Cents,

    /// Score computed at submission
    pub points: u64,
}

impl Receipt {
    /// Build a stored receipt from validated fields under the given identity
    pub fn new(validated: ValidatedReceipt, id: Uuid) -> Self {
        let points = calculate_points(&validated);

        Receipt {
            id,
            retailer: validated.retailer,
            purchased_at: validated.purchased_at,
            items: validated.items,
            total: validated.total,
            points,
        }
    }
}

/// Validate, score, and assign a fresh identity to a raw submission
pub fn process_receipt(raw: &RawReceipt) -> Result<Receipt, ValidationError> {
    let validated = validate_receipt(raw)?;
    Ok(Receipt::new(validated, Uuid::new_v4()))
}

// ============================================================================
// TESTS
// ============================================================================
