// Cap Table - Core Library
// Equity ledger ingestion and point-in-time vesting snapshots

pub mod error;
pub mod entities;
pub mod parser;     // Ledger source - CSV rows
pub mod validator;  // Row validation - raw strings → typed record
pub mod ledger;     // Employee directory + per-award event index
pub mod vesting;    // As-of-date aggregation
pub mod report;     // CSV / JSON output

// Re-export commonly used types
pub use error::{LedgerError, RowError};
pub use entities::{
    Employee, EquityEvent, EquityEventType, ShareHolder, ShareHolderType,
};
pub use parser::{LedgerReader, RawRecord, ReaderOptions, FIELD_COUNT};
pub use validator::{validate_record, ValidatedRecord, DATE_FORMAT};
pub use ledger::{load_ledger, Ledger, LedgerStats};
pub use vesting::{today, VestingEngine, VestingRow};
pub use report::{write_csv, write_json, write_report, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
