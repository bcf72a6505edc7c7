use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn ledger_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn cap_table() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cap-table"));
    cmd.env("RUST_LOG", "error")
        .env_remove("CAP_TABLE_LEDGER")
        .env_remove("CAP_TABLE_AS_OF");
    cmd
}

#[test]
fn test_prints_cap_table_and_summary() {
    let ledger = ledger_file(
        "VEST,E1,Alice,ISO-1,2020-01-01,100\n\
         CANCEL,E1,Alice,ISO-1,2020-03-01,40\n",
    );

    cap_table()
        .arg(ledger.path())
        .args(["--as-of", "2020-06-01"])
        .assert()
        .success()
        .stdout("employee_id,employee_name,award_id,net_quantity\nE1,Alice,ISO-1,60\n")
        .stderr(predicate::str::contains(
            "Loaded 2 rows, 1 employees, 1 awards, 2 events",
        ))
        .stderr(predicate::str::contains("Cap table as of 2020-06-01: 1 rows"));
}

#[test]
fn test_json_output() {
    let ledger = ledger_file("VEST,E1,Alice,ISO-1,2020-01-01,100\n");

    cap_table()
        .arg(ledger.path())
        .args(["--as-of", "2020-06-01", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net_quantity\": 100"));
}

#[test]
fn test_bad_row_fails_without_output() {
    let ledger = ledger_file(
        "VEST,E1,Alice,ISO-1,2020-01-01,100\n\
         VEST,E1,Alice,ISO-2,2020-01-01,abc\n",
    );

    cap_table()
        .arg(ledger.path())
        .args(["--as-of", "2020-06-01"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed quantity"));
}
