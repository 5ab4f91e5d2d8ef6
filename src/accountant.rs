// 💰 Accountant - Salary statistics over the organizational structure
// Per-level averages and the per-level salary categorization report

use crate::categorizer::SalaryCategorizer;
use crate::employee::Employee;
use crate::hierarchy::OrganizationalStructure;
use crate::report::OrganizationalSalaryReport;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

// ============================================================================
// ACCOUNTANT
// ============================================================================

/// Compiles salary statistics for an [`OrganizationalStructure`].
///
/// A manager is expected to earn 20% to 50% more than the average salary of
/// their direct reports. The multipliers are held as fields so a different
/// policy can be injected without touching the algorithm.
pub struct Accountant {
    structure: OrganizationalStructure,

    /// Lower edge of the expected band, as a multiplier (default 1.20).
    min_salary_increase: Decimal,

    /// Upper edge of the expected band, as a multiplier (default 1.50).
    max_salary_increase: Decimal,
}

impl Accountant {
    pub fn new(structure: OrganizationalStructure) -> Self {
        Self::with_multipliers(structure, Decimal::new(120, 2), Decimal::new(150, 2))
    }

    pub fn with_multipliers(
        structure: OrganizationalStructure,
        min_salary_increase: Decimal,
        max_salary_increase: Decimal,
    ) -> Self {
        Accountant {
            structure,
            min_salary_increase,
            max_salary_increase,
        }
    }

    /// Arithmetic mean of the salaries, rounded to 2 fractional digits,
    /// half-up. An empty list averages to exactly zero.
    pub fn average_salary_of(&self, employees: &[Employee]) -> Decimal {
        if employees.is_empty() {
            return Decimal::ZERO;
        }

        let total: Decimal = employees.iter().map(|e| e.salary).sum();
        (total / Decimal::from(employees.len() as u64))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Average salary for every organizational level.
    pub fn average_salary_by_level(&self) -> BTreeMap<u32, Decimal> {
        self.structure
            .employees_by_level()
            .iter()
            .map(|(&level, employees)| (level, self.average_salary_of(employees)))
            .collect()
    }

    /// Build the salary discrepancy report: for every level, the managers at
    /// that level are categorized against the band derived from the level
    /// below them. Leaf levels have no subordinates and get a [0, 0] band.
    pub fn create_salary_report(&self) -> OrganizationalSalaryReport {
        let by_level = self.structure.employees_by_level();

        let mut report_per_level = BTreeMap::new();
        for (&level, managers) in by_level {
            let subordinates = by_level
                .get(&(level + 1))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            report_per_level.insert(level, self.categorize_employees(managers, subordinates));
        }

        OrganizationalSalaryReport::new(report_per_level)
    }

    fn average_salary_increased_by(&self, employees: &[Employee], increase: Decimal) -> Decimal {
        if employees.is_empty() {
            return Decimal::ZERO;
        }
        self.average_salary_of(employees) * increase
    }

    fn categorize_employees(
        &self,
        managers: &[Employee],
        subordinates: &[Employee],
    ) -> SalaryCategorizer {
        let min_expected = self.average_salary_increased_by(subordinates, self.min_salary_increase);
        let max_expected = self.average_salary_increased_by(subordinates, self.max_salary_increase);

        let mut categorizer = SalaryCategorizer::new(min_expected, max_expected);
        for manager in managers {
            categorizer.add_employee(manager.clone());
        }
        categorizer
    }
}

// ============================================================================
// TESTS
// ============================================================================
