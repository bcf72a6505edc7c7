// 📂 Ledger Source - CSV rows → RawRecord
//
// Format (no header by default), six fields per row:
//   event_type,employee_id,employee_name,award_id,event_date,award_qty
//   VEST,E001,Alice Smith,ISO-001,2020-01-01,1000
//
// Records are yielded lazily, one at a time. Nothing here interprets a field;
// that is the validator's job.

use crate::error::{LedgerError, RowError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// Number of fields every ledger row must carry
pub const FIELD_COUNT: usize = 6;

// ============================================================================
// RAW RECORD
// ============================================================================

/// One ledger row, untouched strings plus its position in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub event_type: String,
    pub employee_id: String,
    pub employee_name: String,
    pub award_id: String,
    pub event_date: String,
    pub award_qty: String,

    // Provenance
    pub line_number: u64,
}

impl RawRecord {
    /// Build from positional fields. Anything but exactly six is malformed.
    pub fn from_fields<I, S>(fields: I, line_number: u64) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let found = fields.len();

        let fields: [String; FIELD_COUNT] = fields
            .try_into()
            .map_err(|_| RowError::MalformedRow { found })?;
        let [event_type, employee_id, employee_name, award_id, event_date, award_qty] = fields;

        Ok(RawRecord {
            event_type,
            employee_id,
            employee_name,
            award_id,
            event_date,
            award_qty,
            line_number,
        })
    }

    /// The row as it would appear in the ledger, quoting included
    pub fn raw_line(&self) -> String {
        to_csv_line(&[
            self.event_type.as_str(),
            self.employee_id.as_str(),
            self.employee_name.as_str(),
            self.award_id.as_str(),
            self.event_date.as_str(),
            self.award_qty.as_str(),
        ])
    }
}

/// Re-encode fields as one CSV line so diagnostics keep quoted commas intact
fn to_csv_line(fields: &[&str]) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let encoded = wtr
        .write_record(fields)
        .map_err(|e| e.to_string())
        .and_then(|_| wtr.into_inner().map_err(|e| e.to_string()));

    match encoded {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim_end_matches('\n').to_string(),
        // Writing into a Vec does not fail in practice
        Err(_) => fields.join(","),
    }
}

// ============================================================================
// LEDGER READER
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    /// Skip the first row as a header
    pub has_headers: bool,
}

/// Lazy iterator of ledger rows read from CSV
///
/// Blank rows are skipped. A row with the wrong field count is yielded as
/// `LedgerError::InvalidRow` wrapping `RowError::MalformedRow`.
pub struct LedgerReader<R> {
    records: csv::StringRecordsIntoIter<R>,
}

impl LedgerReader<File> {
    pub fn from_path(path: &Path, options: ReaderOptions) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|source| LedgerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LedgerReader::from_reader(file, options))
    }
}

impl<R: io::Read> LedgerReader<R> {
    pub fn from_reader(reader: R, options: ReaderOptions) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(options.has_headers)
            .flexible(true) // field count is checked per row below
            .from_reader(reader);

        LedgerReader {
            records: reader.into_records(),
        }
    }
}

impl<R: io::Read> Iterator for LedgerReader<R> {
    type Item = Result<RawRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(LedgerError::Read(e))),
            };

            if is_blank(&record) {
                continue;
            }

            let line = record.position().map_or(0, |p| p.line());
            let parsed = RawRecord::from_fields(record.iter(), line).map_err(|source| {
                LedgerError::InvalidRow {
                    line,
                    raw: to_csv_line(&record.iter().collect::<Vec<_>>()),
                    source,
                }
            });
            return Some(parsed);
        }
    }
}

/// A row with no content at all (empty, or a single whitespace-only field)
fn is_blank(record: &csv::StringRecord) -> bool {
    match record.len() {
        0 => true,
        1 => record[0].trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &str, options: ReaderOptions) -> Vec<Result<RawRecord, LedgerError>> {
        LedgerReader::from_reader(data.as_bytes(), options).collect()
    }

    #[test]
    fn test_reads_six_field_rows() {
        let data = "VEST,E001,Alice Smith,ISO-001,2020-01-01,1000\n\
                    CANCEL,E001,Alice Smith,ISO-001,2021-01-01,700\n";

        let records: Vec<RawRecord> = read_all(data, ReaderOptions::default())
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event_type, "VEST");
        assert_eq!(records[0].employee_name, "Alice Smith");
        assert_eq!(records[0].award_qty, "1000");
        assert_eq!(records[0].line_number, 1);
        assert_eq!(records[1].event_type, "CANCEL");
        assert_eq!(records[1].line_number, 2);
        assert_eq!(records[1].raw_line(), "CANCEL,E001,Alice Smith,ISO-001,2021-01-01,700");
    }

    #[test]
    fn test_skips_blank_rows() {
        let data = "\nVEST,E001,Alice,ISO-001,2020-01-01,10\n   \n\n\
                    VEST,E002,Bob,ISO-002,2020-01-01,20\n";

        let records: Vec<RawRecord> = read_all(data, ReaderOptions::default())
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].employee_id, "E002");
    }

    #[test]
    fn test_header_row_is_skipped_when_configured() {
        let data = "event_type,employee_id,employee_name,award_id,event_date,award_qty\n\
                    VEST,E001,Alice,ISO-001,2020-01-01,10\n";

        let records = read_all(data, ReaderOptions { has_headers: true });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().employee_id, "E001");
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let data = "VEST,E001,Alice,ISO-001,2020-01-01\n";

        let records = read_all(data, ReaderOptions::default());

        assert_eq!(records.len(), 1);
        match &records[0] {
            Err(LedgerError::InvalidRow { line, raw, source }) => {
                assert_eq!(*line, 1);
                assert_eq!(raw, "VEST,E001,Alice,ISO-001,2020-01-01");
                assert!(matches!(source, RowError::MalformedRow { found: 5 }));
            }
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_line_keeps_quoting() {
        let data = "VEST,E001,\"Smith, Alice\",ISO-001,2020-01-01,10\n";

        let records = read_all(data, ReaderOptions::default());
        let record = records[0].as_ref().unwrap();

        assert_eq!(record.employee_name, "Smith, Alice");
        assert_eq!(record.raw_line(), data.trim_end());
    }

    #[test]
    fn test_malformed_row_raw_keeps_quoting() {
        let data = "VEST,E001,\"Smith, Alice\",ISO-001\n";

        let records = read_all(data, ReaderOptions::default());

        match &records[0] {
            Err(LedgerError::InvalidRow { raw, source, .. }) => {
                assert_eq!(raw, "VEST,E001,\"Smith, Alice\",ISO-001");
                assert!(matches!(source, RowError::MalformedRow { found: 4 }));
            }
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn test_from_fields_rejects_extra_fields() {
        let err = RawRecord::from_fields(["VEST", "E1", "A", "ISO-1", "2020-01-01", "1", "x"], 3)
            .unwrap_err();
        assert!(matches!(err, RowError::MalformedRow { found: 7 }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = LedgerReader::from_path(
            Path::new("/nonexistent/ledger.csv"),
            ReaderOptions::default(),
        );
        assert!(matches!(result, Err(LedgerError::Open { .. })));
    }
}
