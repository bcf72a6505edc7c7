// 📒 Ledger Indexer
//
// Two indexes built from validated rows:
// - employee directory: employee_id → Employee (award set grows per sighting)
// - event index:        award_id → events in ledger order
//
// Ingestion is all-or-nothing. A Ledger is only handed out once every row
// in the source validated; the first bad row aborts the whole load.

use crate::entities::{Employee, EquityEvent, EquityEventType, ShareHolder};
use crate::error::LedgerError;
use crate::parser::{LedgerReader, RawRecord, ReaderOptions};
use crate::validator::{validate_record, ValidatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Default)]
pub struct Ledger {
    employees: BTreeMap<String, Employee>,
    events: HashMap<String, Vec<EquityEvent>>,
    /// First employee to claim each award id
    award_owners: HashMap<String, String>,
    rows_ingested: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Build a ledger from a source of raw rows
    ///
    /// Fails with `EmptyLedger` if the source yields nothing, and with the
    /// first read or validation error otherwise.
    pub fn from_records<I>(records: I) -> Result<Ledger, LedgerError>
    where
        I: IntoIterator<Item = Result<RawRecord, LedgerError>>,
    {
        let mut records = records.into_iter().peekable();
        if records.peek().is_none() {
            return Err(LedgerError::EmptyLedger);
        }

        let mut ledger = Ledger::new();
        for raw in records {
            let raw = raw?;
            let record = validate_record(&raw).map_err(|source| LedgerError::InvalidRow {
                line: raw.line_number,
                raw: raw.raw_line(),
                source,
            })?;

            debug!(
                line = raw.line_number,
                employee_id = %record.employee_id,
                award_id = %record.award_id,
                event_type = %record.event_type,
                "indexing ledger row"
            );
            ledger.record(record);
        }

        info!(
            rows = ledger.rows_ingested,
            employees = ledger.employees.len(),
            awards = ledger.events.len(),
            "ledger ingested"
        );
        Ok(ledger)
    }

    /// Index one validated row: employee upsert, then event append
    pub fn record(&mut self, record: ValidatedRecord) {
        self.record_employee(&record.employee_name, &record.employee_id, &record.award_id);
        self.record_event(
            &record.award_id,
            record.event_date,
            record.award_qty,
            record.event_type,
        );
        self.rows_ingested += 1;
    }

    /// Upsert an employee and attach `award_id` to it
    ///
    /// A known employee keeps the name it was first recorded with.
    pub fn record_employee(&mut self, name: &str, employee_id: &str, award_id: &str) {
        let newly_claimed = match self.employees.get_mut(employee_id) {
            Some(employee) => employee.add_equity_award(award_id),
            None => {
                self.employees.insert(
                    employee_id.to_string(),
                    Employee::with_award(name.to_string(), employee_id.to_string(), award_id),
                );
                true
            }
        };

        if !newly_claimed {
            return;
        }
        let first_owner: &str = self
            .award_owners
            .entry(award_id.to_string())
            .or_insert_with(|| employee_id.to_string());
        if first_owner != employee_id {
            warn!(
                employee_id,
                award_id,
                first_owner = %first_owner,
                "award id already held by another employee"
            );
        }
    }

    /// Append an event to the award's list, creating the list on first use
    pub fn record_event(
        &mut self,
        award_id: &str,
        event_date: NaiveDate,
        award_qty: i64,
        event_type: EquityEventType,
    ) {
        self.events
            .entry(award_id.to_string())
            .or_default()
            .push(EquityEvent::new(
                award_id.to_string(),
                event_date,
                event_type,
                award_qty,
            ));
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// All employees, ordered by employee id
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Events for an award in ledger order; empty for unknown awards
    pub fn events_for(&self, award_id: &str) -> &[EquityEvent] {
        self.events.get(award_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every employee holding `award_id`
    ///
    /// Normally one. More than one means the source ledger assigned the same
    /// award to several employees, and each of them reports its full quantity.
    pub fn owners_of(&self, award_id: &str) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|e| e.holds_award(award_id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.events.is_empty()
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            rows: self.rows_ingested,
            employees: self.employees.len(),
            awards: self.events.len(),
            events: self.events.values().map(Vec::len).sum(),
        }
    }
}

/// Load and index a ledger CSV file
pub fn load_ledger(path: &Path, options: ReaderOptions) -> Result<Ledger, LedgerError> {
    let reader = LedgerReader::from_path(path, options)?;
    Ledger::from_records(reader)
}

// ============================================================================
// STATS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub rows: usize,
    pub employees: usize,
    pub awards: usize,
    pub events: usize,
}

impl fmt::Display for LedgerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} employees, {} awards, {} events",
            self.rows, self.employees, self.awards, self.events
        )
    }
}
