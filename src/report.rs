// 📊 Organizational Salary Report - Render per-level categorizations
// Bounded-depth detail lines plus a terse tally for deeper levels

use crate::categorizer::SalaryCategorizer;
use crate::employee::Employee;
use crate::printers::{EmployeePrinter, Printer};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Intermediate division scale. Ratios are computed at 10 fractional digits
/// before the final rounding to 2, so the printed percentage never carries
/// compounded rounding error.
const SCALE: u32 = 10;

const LEVELS_DELIMITER: &str = "--------------------";

// ============================================================================
// REPORT ERROR
// ============================================================================

/// A caller-contract violation. Always surfaced, never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// `print_report` was asked for a zero-level report.
    InvalidLevelDepth,
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::InvalidLevelDepth => {
                write!(f, "The level depth must be at least 1")
            }
        }
    }
}

impl std::error::Error for ReportError {}

// ============================================================================
// ORGANIZATIONAL SALARY REPORT
// ============================================================================

/// The compiled salary discrepancy report: one [`SalaryCategorizer`] per
/// organizational level, in ascending level order.
pub struct OrganizationalSalaryReport {
    report_per_level: BTreeMap<u32, SalaryCategorizer>,
}

impl OrganizationalSalaryReport {
    pub fn new(report_per_level: BTreeMap<u32, SalaryCategorizer>) -> Self {
        OrganizationalSalaryReport { report_per_level }
    }

    pub fn report_per_level(&self) -> &BTreeMap<u32, SalaryCategorizer> {
        &self.report_per_level
    }

    /// Print the report, one line per `print` call, in this order: a header,
    /// then for each of the first `level_depth` levels the below- and
    /// above-expectation employees with their discrepancy percentages, then
    /// one summary line per deeper level.
    ///
    /// An empty report prints exactly "Report is empty"; a report whose
    /// levels are all empty prints exactly "No employees found".
    pub fn print_report(
        &self,
        printer: &mut EmployeePrinter,
        level_depth: usize,
    ) -> Result<(), ReportError> {
        if level_depth < 1 {
            return Err(ReportError::InvalidLevelDepth);
        }
        if self.report_per_level.is_empty() {
            printer.print("Report is empty");
            return Ok(());
        }

        let all_employees_count: usize = self
            .report_per_level
            .values()
            .map(SalaryCategorizer::total_count)
            .sum();
        if all_employees_count == 0 {
            printer.print("No employees found");
            return Ok(());
        }

        printer.print("Salary discrepancy report:");
        self.print_included_levels(printer, level_depth);

        // The Board wants to identify employees with too many managers
        // between them and the CEO, but also wants short reporting lines.
        // Levels past the cutoff are therefore summarized by count only.
        self.print_excluded_level_counts(printer, level_depth);

        Ok(())
    }

    fn print_included_levels(&self, printer: &mut EmployeePrinter, level_depth: usize) {
        for (&level, categorizer) in self.report_per_level.iter().take(level_depth) {
            self.print_level_report(level, categorizer, printer);
        }
    }

    fn print_excluded_level_counts(&self, printer: &mut EmployeePrinter, start_level: usize) {
        for (&level, categorizer) in self.report_per_level.iter().skip(start_level) {
            let excluded_employees = categorizer.total_count();
            // level - 2: the level itself and the CEO are not counted as
            // managers in between.
            printer.print(&format!(
                "There are {} employees on level {} which have {} managers between them and the CEO.",
                excluded_employees,
                level,
                level - 2
            ));
        }
    }

    fn print_level_report(
        &self,
        level: u32,
        categorizer: &SalaryCategorizer,
        printer: &mut EmployeePrinter,
    ) {
        printer.print(&format!("Level {}", level));
        self.print_below_expectation(categorizer, printer);
        printer.print("");
        self.print_above_expectation(categorizer, printer);
        printer.print(&format!("{}\n", LEVELS_DELIMITER));
    }

    fn print_below_expectation(&self, categorizer: &SalaryCategorizer, printer: &mut EmployeePrinter) {
        printer.print("Below expectation:");
        for employee in categorizer.below_expectation() {
            let percentage =
                Self::shortfall_percentage(employee, categorizer.min_expected_salary());
            printer.print_employee_with_postfix(employee, &format!("(-{:.2}%)", percentage));
        }
    }

    fn print_above_expectation(&self, categorizer: &SalaryCategorizer, printer: &mut EmployeePrinter) {
        printer.print("Above expectation:");
        for employee in categorizer.above_expectation() {
            let percentage =
                Self::excess_percentage(employee, categorizer.max_expected_salary());
            printer.print_employee_with_postfix(employee, &format!("(+{:.2}%)", percentage));
        }
    }

    /// How far the salary falls short of the band's lower edge, in percent.
    fn shortfall_percentage(employee: &Employee, min_expected_salary: Decimal) -> Decimal {
        if min_expected_salary.is_zero() {
            // A collapsed band gives a manager with no subordinates nothing
            // to be judged against.
            return Decimal::ZERO;
        }

        let ratio = (employee.salary / min_expected_salary)
            .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        ((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// How far the salary exceeds the band's upper edge, in percent.
    fn excess_percentage(employee: &Employee, max_expected_salary: Decimal) -> Decimal {
        if max_expected_salary.is_zero() {
            return Decimal::ZERO;
        }

        let ratio = (employee.salary / max_expected_salary)
            .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        ((ratio - Decimal::ONE) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accountant::Accountant;
    use crate::employee::ManagerRef;
    use crate::hierarchy::HierarchyBuilder;
    use crate::printers::RecordingPrinter;

    fn employee(id: u32, first: &str, last: &str, salary: i64) -> Employee {
        Employee::new(
            id,
            first,
            last,
            Decimal::from(salary),
            ManagerRef::ReportsTo(1),
        )
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn recording() -> (RecordingPrinter, EmployeePrinter) {
        let recorder = RecordingPrinter::new();
        let printer = EmployeePrinter::new(Box::new(recorder.clone()));
        (recorder, printer)
    }

    /// Three levels mirroring a small organization: the CEO, two managers,
    /// and four employees on the leaf level with a collapsed band.
    fn test_report() -> OrganizationalSalaryReport {
        let mut map = BTreeMap::new();

        let mut level1 = SalaryCategorizer::new(dec("22080"), dec("27600"));
        level1.add_employee(employee(1, "John", "Doe", 15000));
        map.insert(1, level1);

        let mut level2 = SalaryCategorizer::new(dec("8250"), dec("10312.5"));
        level2.add_employee(employee(2, "Alice", "Berton", 8000));
        level2.add_employee(employee(3, "Jane", "Suzuka", 10400));
        map.insert(2, level2);

        let mut level3 = SalaryCategorizer::new(Decimal::ZERO, Decimal::ZERO);
        level3.add_employee(employee(4, "Bob", "Smith", 7000));
        level3.add_employee(employee(5, "Charlie", "Brown", 6500));
        level3.add_employee(employee(6, "David", "Jones", 6800));
        level3.add_employee(employee(7, "Eve", "Johnson", 7200));
        map.insert(3, level3);

        OrganizationalSalaryReport::new(map)
    }

    #[test]
    fn test_level_depth_below_one_is_an_error() {
        let report = OrganizationalSalaryReport::new(BTreeMap::new());
        let (_, mut printer) = recording();

        let result = report.print_report(&mut printer, 0);

        let err = result.unwrap_err();
        assert_eq!(err, ReportError::InvalidLevelDepth);
        assert_eq!(err.to_string(), "The level depth must be at least 1");
    }

    #[test]
    fn test_empty_report() {
        let report = OrganizationalSalaryReport::new(BTreeMap::new());
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 1).unwrap();

        assert_eq!(recorder.lines(), vec!["Report is empty".to_string()]);
    }

    #[test]
    fn test_no_employees_found() {
        let mut map = BTreeMap::new();
        map.insert(1, SalaryCategorizer::new(Decimal::ZERO, Decimal::ZERO));
        let report = OrganizationalSalaryReport::new(map);
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 1).unwrap();

        assert_eq!(recorder.lines(), vec!["No employees found".to_string()]);
    }

    #[test]
    fn test_print_report_full_transcript() {
        let report = test_report();
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 2).unwrap();

        let expected = vec![
            "Salary discrepancy report:",
            "Level 1",
            "Below expectation:",
            "John Doe (-32.07%)",
            "",
            "Above expectation:",
            "--------------------\n",
            "Level 2",
            "Below expectation:",
            "Alice Berton (-3.03%)",
            "",
            "Above expectation:",
            "Jane Suzuka (+0.85%)",
            "--------------------\n",
            "There are 4 employees on level 3 which have 1 managers between them and the CEO.",
        ];
        assert_eq!(recorder.lines(), expected);
    }

    #[test]
    fn test_collapsed_band_prints_zero_discrepancy() {
        let report = test_report();
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 3).unwrap();

        let lines = recorder.lines();
        // The leaf level has a [0, 0] band; its employees are reported at
        // a guarded zero discrepancy instead of dividing by zero.
        assert!(lines.contains(&"Bob Smith (+0.00%)".to_string()));
        assert!(lines.contains(&"Eve Johnson (+0.00%)".to_string()));
        // With every level printed there is nothing left to summarize.
        assert!(!lines.iter().any(|l| l.starts_with("There are")));
    }

    #[test]
    fn test_depth_larger_than_report_prints_every_level() {
        let report = test_report();
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 10).unwrap();

        let lines = recorder.lines();
        assert!(lines.contains(&"Level 3".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("There are")));
    }

    #[test]
    fn test_full_pipeline_from_flat_records() {
        let employees = vec![
            Employee::new(1, "John", "Doe", dec("15000"), ManagerRef::Root),
            Employee::new(2, "Alice", "Berton", dec("8000"), ManagerRef::ReportsTo(1)),
            Employee::new(3, "Jane", "Suzuka", dec("10400"), ManagerRef::ReportsTo(1)),
            Employee::new(4, "Bob", "Smith", dec("7000"), ManagerRef::ReportsTo(2)),
            Employee::new(5, "Charlie", "Brown", dec("6500"), ManagerRef::ReportsTo(2)),
            Employee::new(6, "David", "Jones", dec("6800"), ManagerRef::ReportsTo(3)),
            Employee::new(7, "Eve", "Johnson", dec("7200"), ManagerRef::ReportsTo(3)),
        ];
        let structure = HierarchyBuilder::new().build(employees).unwrap();
        let report = Accountant::new(structure).create_salary_report();
        let (recorder, mut printer) = recording();

        report.print_report(&mut printer, 2).unwrap();

        let lines = recorder.lines();
        assert_eq!(lines[0], "Salary discrepancy report:");
        // Level 2 averages 9200, so the CEO is judged against [11040, 13800].
        assert!(lines.contains(&"John Doe (+8.70%)".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "There are 4 employees on level 3 which have 1 managers between them and the CEO."
        );
    }
}
