// 📊 Vesting Engine - point-in-time cap table
//
// Replays each award's events up to a cutoff date (inclusive):
//   VEST   → +qty
//   CANCEL → -qty
// Events after the cutoff are ignored. The engine only borrows the ledger,
// so a built ledger can be queried any number of times with different dates.

use crate::entities::{Employee, ShareHolder};
use crate::ledger::Ledger;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One (employee, award) line of the cap table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingRow {
    pub employee_id: String,
    pub employee_name: String,
    pub award_id: String,
    /// Wider than a single event quantity; sums of i64 values overflow i64
    pub net_quantity: i128,
}

/// Today's date in local time, the default cutoff
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct VestingEngine<'a> {
    ledger: &'a Ledger,
}

impl<'a> VestingEngine<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        VestingEngine { ledger }
    }

    /// Net quantity of one award as of `cutoff`
    ///
    /// Can be negative when cancellations outweigh vests in the ledger; that
    /// is reported as-is. Unknown awards net to zero.
    pub fn compute_for_award(&self, award_id: &str, cutoff: NaiveDate) -> i128 {
        self.ledger
            .events_for(award_id)
            .iter()
            .filter(|event| event.is_effective_on(cutoff))
            .map(|event| event.signed_qty())
            .sum()
    }

    /// One row per award held by `employee`, zero-quantity awards included
    pub fn compute_for_employee(&self, employee: &Employee, cutoff: NaiveDate) -> Vec<VestingRow> {
        employee
            .equity_awards()
            .iter()
            .map(|award_id| {
                let net_quantity = self.compute_for_award(award_id, cutoff);
                if net_quantity < 0 {
                    warn!(
                        employee_id = %employee.employee_id,
                        award_id = %award_id,
                        net_quantity = %net_quantity,
                        %cutoff,
                        "cancellations exceed vested quantity"
                    );
                }

                VestingRow {
                    employee_id: employee.employee_id.clone(),
                    employee_name: employee.full_name.clone(),
                    award_id: award_id.clone(),
                    net_quantity,
                }
            })
            .collect()
    }

    /// Same as `compute_for_employee`, looked up by id
    pub fn compute_for_employee_id(
        &self,
        employee_id: &str,
        cutoff: NaiveDate,
    ) -> Option<Vec<VestingRow>> {
        self.ledger
            .employee(employee_id)
            .map(|employee| self.compute_for_employee(employee, cutoff))
    }

    /// Full cap table as of `cutoff`, or as of today when `None`
    ///
    /// Rows are ordered by employee id, then award id.
    pub fn compute_all(&self, cutoff: Option<NaiveDate>) -> Vec<VestingRow> {
        let cutoff = cutoff.unwrap_or_else(today);

        self.ledger
            .employees()
            .flat_map(|employee| self.compute_for_employee(employee, cutoff))
            .collect()
    }
}
