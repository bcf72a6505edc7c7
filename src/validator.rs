// ✅ Row Validator - RawRecord → ValidatedRecord
//
// The only way to get a ValidatedRecord. Raw strings never travel past here.

use crate::entities::EquityEventType;
use crate::error::RowError;
use crate::parser::RawRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ledger date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One ledger row, normalized and typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub event_type: EquityEventType,
    pub employee_id: String,
    pub employee_name: String,
    pub award_id: String,
    pub event_date: NaiveDate,

    /// Sign is not checked here; VEST/CANCEL decides the direction
    pub award_qty: i64,
}

/// Validate one raw row
///
/// Checks run in field order and stop at the first failure:
/// 1. event_type parses as VEST/CANCEL (case-insensitive, trimmed)
/// 2. employee_id is non-empty after trimming
/// 3. employee_name is trimmed, blank allowed
/// 4. award_id is non-empty after trimming
/// 5. event_date parses as YYYY-MM-DD
/// 6. award_qty parses as a (possibly signed) integer
pub fn validate_record(raw: &RawRecord) -> Result<ValidatedRecord, RowError> {
    let event_type: EquityEventType = raw.event_type.parse()?;
    let employee_id = required(&raw.employee_id, "employee_id")?;
    let employee_name = raw.employee_name.trim().to_string();
    let award_id = required(&raw.award_id, "award_id")?;
    let event_date = parse_date(&raw.event_date)?;
    let award_qty = parse_quantity(&raw.award_qty)?;

    Ok(ValidatedRecord {
        event_type,
        employee_id,
        employee_name,
        award_id,
        event_date,
        award_qty,
    })
}

fn required(value: &str, field: &'static str) -> Result<String, RowError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RowError::MissingIdentifier { field });
    }
    Ok(value.to_string())
}

/// Parse a ledger date (YYYY-MM-DD)
pub fn parse_date(value: &str) -> Result<NaiveDate, RowError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        RowError::MalformedDate {
            value: value.to_string(),
            source,
        }
    })
}

fn parse_quantity(value: &str) -> Result<i64, RowError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| RowError::MalformedQuantity {
            value: value.to_string(),
            source,
        })
}
