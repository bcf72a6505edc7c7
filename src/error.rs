// ❌ Error Types
// Field-level validation failures and ledger-level ingestion failures

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ROW ERRORS
// ============================================================================

/// One ledger row failed validation
#[derive(Debug, Error)]
pub enum RowError {
    #[error("invalid event type {token:?} (expected VEST or CANCEL)")]
    InvalidEventType { token: String },

    #[error("missing identifier: {field} is empty")]
    MissingIdentifier { field: &'static str },

    #[error("malformed date {value:?} (expected YYYY-MM-DD)")]
    MalformedDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("malformed quantity {value:?}")]
    MalformedQuantity {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("malformed row: expected 6 fields, found {found}")]
    MalformedRow { found: usize },
}

impl RowError {
    /// Name of the ledger field that failed, if the failure is field-specific
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RowError::InvalidEventType { .. } => Some("event_type"),
            RowError::MissingIdentifier { field } => Some(field),
            RowError::MalformedDate { .. } => Some("event_date"),
            RowError::MalformedQuantity { .. } => Some("award_qty"),
            RowError::MalformedRow { .. } => None,
        }
    }
}

// ============================================================================
// LEDGER ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A row failed validation. Ingestion stops here.
    #[error("line {line}: {source} (row: {raw})")]
    InvalidRow {
        line: u64,
        raw: String,
        #[source]
        source: RowError,
    },

    #[error("ledger contains no records")]
    EmptyLedger,

    #[error("failed to open ledger {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read ledger: {0}")]
    Read(#[from] csv::Error),
}

impl LedgerError {
    /// The underlying row failure, when this error came from a bad row
    pub fn row_error(&self) -> Option<&RowError> {
        match self {
            LedgerError::InvalidRow { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_names_field() {
        let err = RowError::MissingIdentifier { field: "award_id" };
        assert_eq!(err.field(), Some("award_id"));
        assert_eq!(err.to_string(), "missing identifier: award_id is empty");

        let err = RowError::InvalidEventType { token: "VESTED".to_string() };
        assert_eq!(err.field(), Some("event_type"));
        assert!(err.to_string().contains("\"VESTED\""));

        assert_eq!(RowError::MalformedRow { found: 3 }.field(), None);
    }

    #[test]
    fn test_invalid_row_message_carries_line_and_raw() {
        let err = LedgerError::InvalidRow {
            line: 4,
            raw: "VEST,E1,Alice,ISO-1,2020-01-01,abc".to_string(),
            source: RowError::MalformedQuantity {
                value: "abc".to_string(),
                source: "abc".parse::<i64>().unwrap_err(),
            },
        };

        let message = err.to_string();
        assert!(message.starts_with("line 4:"));
        assert!(message.contains("malformed quantity \"abc\""));
        assert!(message.contains("ISO-1,2020-01-01,abc"));
        assert!(matches!(
            err.row_error(),
            Some(RowError::MalformedQuantity { .. })
        ));
    }
}
