// Entity Models
// Who holds equity, and what happened to it
//
// - ShareHolder: capability shared by every holder kind (identity + award set)
// - Employee: the only holder kind recorded in an employee ledger
// - EquityEvent: one immutable ledger entry against an award

pub mod shareholder;
pub mod employee;
pub mod equity_event;

pub use shareholder::{ShareHolder, ShareHolderType};
pub use employee::Employee;
pub use equity_event::{EquityEvent, EquityEventType};
