// 📅 Equity Events - one VEST or CANCEL entry against an award

use crate::error::RowError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// EVENT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EquityEventType {
    /// Increases the owned quantity of an award
    Vest,

    /// Decreases the owned quantity of an award
    Cancel,
}

impl EquityEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquityEventType::Vest => "VEST",
            EquityEventType::Cancel => "CANCEL",
        }
    }

    /// Signed effect of this event type on a quantity
    ///
    /// Widened to i128 so negating i64::MIN and summing many large
    /// quantities cannot overflow.
    pub fn signed(&self, quantity: i64) -> i128 {
        let quantity = i128::from(quantity);
        match self {
            EquityEventType::Vest => quantity,
            EquityEventType::Cancel => -quantity,
        }
    }
}

impl FromStr for EquityEventType {
    type Err = RowError;

    /// Case- and whitespace-insensitive: "vest", " Vest " and "VEST" all parse
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_uppercase().as_str() {
            "VEST" => Ok(EquityEventType::Vest),
            "CANCEL" => Ok(EquityEventType::Cancel),
            _ => Err(RowError::InvalidEventType {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for EquityEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EQUITY EVENT
// ============================================================================

/// Immutable once constructed; fields are read through accessors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityEvent {
    award_id: String,
    event_date: NaiveDate,
    event_type: EquityEventType,
    award_qty: i64,
}

impl EquityEvent {
    pub fn new(
        award_id: String,
        event_date: NaiveDate,
        event_type: EquityEventType,
        award_qty: i64,
    ) -> Self {
        EquityEvent {
            award_id,
            event_date,
            event_type,
            award_qty,
        }
    }

    pub fn award_id(&self) -> &str {
        &self.award_id
    }

    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    pub fn event_type(&self) -> EquityEventType {
        self.event_type
    }

    pub fn award_qty(&self) -> i64 {
        self.award_qty
    }

    /// True when the event counts toward a snapshot taken on `cutoff` (inclusive)
    pub fn is_effective_on(&self, cutoff: NaiveDate) -> bool {
        self.event_date <= cutoff
    }

    /// Contribution of this event to the award's net quantity
    pub fn signed_qty(&self) -> i128 {
        self.event_type.signed(self.award_qty)
    }
}
