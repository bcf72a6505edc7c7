// 📤 Cap Table Output - CSV and JSON sinks for vesting rows

use crate::vesting::VestingRow;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Write rows as CSV with an `employee_id,employee_name,award_id,net_quantity` header
pub fn write_csv<W: Write>(rows: &[VestingRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    // Header is written explicitly so an empty cap table still gets one
    wtr.write_record(["employee_id", "employee_name", "award_id", "net_quantity"])
        .context("Failed to write CSV header")?;
    for row in rows {
        let net_quantity = row.net_quantity.to_string();
        wtr.write_record([
            row.employee_id.as_str(),
            row.employee_name.as_str(),
            row.award_id.as_str(),
            net_quantity.as_str(),
        ])
        .with_context(|| format!("Failed to write row for award {}", row.award_id))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array
pub fn write_json<W: Write>(rows: &[VestingRow], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows).context("Failed to serialize cap table")?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report<W: Write>(rows: &[VestingRow], format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(rows, writer),
        OutputFormat::Json => write_json(rows, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<VestingRow> {
        vec![
            VestingRow {
                employee_id: "E1".to_string(),
                employee_name: "Smith, Alice".to_string(),
                award_id: "ISO-1".to_string(),
                net_quantity: 60,
            },
            VestingRow {
                employee_id: "E2".to_string(),
                employee_name: "Bobby".to_string(),
                award_id: "NSO-1".to_string(),
                net_quantity: -5,
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&sample_rows(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "employee_id,employee_name,award_id,net_quantity\n\
             E1,\"Smith, Alice\",ISO-1,60\n\
             E2,Bobby,NSO-1,-5\n"
        );
    }

    #[test]
    fn test_write_csv_empty_still_has_header() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "employee_id,employee_name,award_id,net_quantity\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_report(&sample_rows(), OutputFormat::Json, &mut out).unwrap();

        let parsed: Vec<VestingRow> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sample_rows());

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["net_quantity"], 60);
        assert_eq!(value[1]["award_id"], "NSO-1");
    }
}
