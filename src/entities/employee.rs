// 👤 Employee Entity
// The employee id IS the shareholder id; the name is just a display value.

use super::shareholder::{ShareHolder, ShareHolderType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee id, also used as the shareholder id
    pub employee_id: String,

    /// Name as first seen in the ledger
    pub full_name: String,

    equity_awards: BTreeSet<String>,
}

impl Employee {
    /// Create an employee holding no awards yet
    pub fn new(full_name: String, employee_id: String) -> Self {
        Employee {
            employee_id,
            full_name,
            equity_awards: BTreeSet::new(),
        }
    }

    /// Create an employee seeded with its first award
    pub fn with_award(full_name: String, employee_id: String, award_id: &str) -> Self {
        let mut employee = Employee::new(full_name, employee_id);
        employee.add_equity_award(award_id);
        employee
    }
}

impl ShareHolder for Employee {
    fn shareholder_id(&self) -> &str {
        &self.employee_id
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn shareholder_type(&self) -> ShareHolderType {
        ShareHolderType::Employee
    }

    fn equity_awards(&self) -> &BTreeSet<String> {
        &self.equity_awards
    }

    fn add_equity_award(&mut self, award_id: &str) -> bool {
        // Check first so an award already held costs no allocation
        if self.equity_awards.contains(award_id) {
            return false;
        }
        self.equity_awards.insert(award_id.to_string())
    }
}
