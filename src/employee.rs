// 👥 Employee Model - Immutable employee records
// The manager link is an explicit variant, not a reserved id

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// MANAGER REFERENCE
// ============================================================================

/// Who an employee reports to.
///
/// The root of the organization (the CEO) has no manager. Modeling that case
/// as a variant instead of an out-of-range id means an unrecognized manager
/// id can only ever be a broken reference, never "no manager".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerRef {
    /// No manager: this employee is the root of the hierarchy.
    Root,
    /// Reports to the employee with this id.
    ReportsTo(u32),
}

impl ManagerRef {
    pub fn is_root(&self) -> bool {
        matches!(self, ManagerRef::Root)
    }

    /// Manager id, if any.
    pub fn manager_id(&self) -> Option<u32> {
        match self {
            ManagerRef::Root => None,
            ManagerRef::ReportsTo(id) => Some(*id),
        }
    }
}

// ============================================================================
// EMPLOYEE
// ============================================================================

/// A single employee record as ingested from the source file.
/// Core fields never change after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique across the input set.
    pub id: u32,

    pub first_name: String,

    pub last_name: String,

    /// Exact decimal. Salary arithmetic is repeated across levels and must
    /// not accumulate binary floating-point drift.
    pub salary: Decimal,

    pub manager: ManagerRef,
}

impl Employee {
    pub fn new(
        id: u32,
        first_name: &str,
        last_name: &str,
        salary: Decimal,
        manager: ManagerRef,
    ) -> Self {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            salary,
            manager,
        }
    }

    /// "First Last", the form used in printed reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
