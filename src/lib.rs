// Salary Report System - Core Library
// Exposes all modules for use in the CLI and tests

pub mod employee;
pub mod hierarchy;
pub mod categorizer;
pub mod accountant;
pub mod report;
pub mod printers;
pub mod reader;

// Re-export commonly used types
pub use employee::{Employee, ManagerRef};
pub use hierarchy::{HierarchyBuilder, HierarchyError, OrganizationalStructure};
pub use categorizer::SalaryCategorizer;
pub use accountant::Accountant;
pub use report::{OrganizationalSalaryReport, ReportError};
pub use printers::{ConsolePrinter, EmployeePrinter, Printer};
pub use reader::EmployeeReader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
