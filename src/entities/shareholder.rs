// 🧾 ShareHolder - anything that can own equity awards
//
// Employees are the only kind a ledger produces today. Investors and advisors
// would be new ShareHolderType variants with their own implementors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// SHAREHOLDER TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareHolderType {
    Employee,
}

impl ShareHolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareHolderType::Employee => "Employee",
        }
    }
}

// ============================================================================
// SHAREHOLDER CAPABILITY
// ============================================================================

/// Identity, display name and a grow-only set of award ids
pub trait ShareHolder {
    /// Stable identity of the holder
    fn shareholder_id(&self) -> &str;

    /// Display name
    fn full_name(&self) -> &str;

    fn shareholder_type(&self) -> ShareHolderType;

    /// Award ids held, unique
    fn equity_awards(&self) -> &BTreeSet<String>;

    /// Add an award id. Returns false when the holder already had it.
    ///
    /// There is no removal: a holder's award set only grows.
    fn add_equity_award(&mut self, award_id: &str) -> bool;

    fn holds_award(&self, award_id: &str) -> bool {
        self.equity_awards().contains(award_id)
    }
}
