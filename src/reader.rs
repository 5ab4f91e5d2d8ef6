// 📂 Employee Reader - CSV ingestion
// Header: Id,firstName,lastName,salary,managerId
// The root row has no managerId; the reader is flexible about the missing
// trailing field

use crate::employee::{Employee, ManagerRef};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// RAW RECORD
// ============================================================================

/// One CSV row, before the manager reference is made explicit.
#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    #[serde(rename = "Id")]
    id: u32,

    #[serde(rename = "firstName")]
    first_name: String,

    #[serde(rename = "lastName")]
    last_name: String,

    #[serde(rename = "salary")]
    salary: Decimal,

    /// Absent or empty for the root employee.
    #[serde(rename = "managerId")]
    manager_id: Option<u32>,
}

impl EmployeeRecord {
    fn into_employee(self) -> Employee {
        let manager = match self.manager_id {
            None => ManagerRef::Root,
            Some(id) => ManagerRef::ReportsTo(id),
        };
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
            manager,
        }
    }
}

// ============================================================================
// EMPLOYEE READER
// ============================================================================

/// Reads employees from a CSV file. The file is assumed well-formed; a row
/// that fails to parse is an error, not a silent skip.
pub struct EmployeeReader;

impl EmployeeReader {
    pub fn new() -> Self {
        EmployeeReader
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Employee>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())
            .with_context(|| format!("Failed to open employees file: {:?}", path.as_ref()))?;

        let mut employees = Vec::new();
        for result in rdr.deserialize() {
            let record: EmployeeRecord =
                result.context("Failed to deserialize employee record")?;
            employees.push(record.into_employee());
        }

        Ok(employees)
    }
}

impl Default for EmployeeReader {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
