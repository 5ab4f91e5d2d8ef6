// 🏢 Hierarchy Builder - Flat records to a level-indexed structure
// Sorts by id, groups by manager, assigns levels breadth-first from the root

use crate::employee::Employee;
use std::collections::{BTreeMap, HashSet};

// ============================================================================
// HIERARCHY ERROR
// ============================================================================

/// A precondition violation in the input employee set. Fatal to the current
/// run, never recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// No employee is flagged as the root of the organization.
    MissingRoot,
    /// Two employees share the same id.
    DuplicateId(u32),
    /// An employee references a manager id that matches no employee.
    UnknownManager { employee_id: u32, manager_id: u32 },
}

impl std::fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyError::MissingRoot => {
                write!(f, "No root employee found in the input set")
            }
            HierarchyError::DuplicateId(id) => {
                write!(f, "Duplicate employee id: {}", id)
            }
            HierarchyError::UnknownManager {
                employee_id,
                manager_id,
            } => {
                write!(
                    f,
                    "Employee {} references unknown manager id {}",
                    employee_id, manager_id
                )
            }
        }
    }
}

impl std::error::Error for HierarchyError {}

// ============================================================================
// ORGANIZATIONAL STRUCTURE
// ============================================================================

/// Read-only view over a validated employee set.
///
/// Employees are sorted by id and grouped by their manager and by their
/// organizational level. Built once, never mutated; accessors hand out
/// borrows, so callers cannot affect internal state.
#[derive(Debug, Clone)]
pub struct OrganizationalStructure {
    sorted_by_id: Vec<Employee>,
    by_manager: BTreeMap<u32, Vec<Employee>>,
    by_level: BTreeMap<u32, Vec<Employee>>,
}

impl OrganizationalStructure {
    /// All employees, sorted by id.
    pub fn employees(&self) -> &[Employee] {
        &self.sorted_by_id
    }

    /// Manager id to that manager's direct reports, in ascending id order.
    pub fn employees_by_manager(&self) -> &BTreeMap<u32, Vec<Employee>> {
        &self.by_manager
    }

    /// Level (root = 1) to the employees at that level. Levels are
    /// contiguous from 1.
    pub fn employees_by_level(&self) -> &BTreeMap<u32, Vec<Employee>> {
        &self.by_level
    }
}

// ============================================================================
// HIERARCHY BUILDER
// ============================================================================

pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        HierarchyBuilder
    }

    /// Build an [`OrganizationalStructure`] from an unordered employee set.
    ///
    /// Validates the set first: ids must be unique and every manager
    /// reference must resolve to some employee. A missing root is an error;
    /// if several employees are flagged as root, the one with the lowest id
    /// wins and the others' subtrees are unreachable.
    pub fn build(
        &self,
        employees: Vec<Employee>,
    ) -> Result<OrganizationalStructure, HierarchyError> {
        let mut sorted_by_id = employees;
        sorted_by_id.sort_by_key(|e| e.id);

        Self::validate(&sorted_by_id)?;

        let by_manager = Self::group_by_manager(&sorted_by_id);
        let by_level = Self::group_by_level(&sorted_by_id, &by_manager)?;

        Ok(OrganizationalStructure {
            sorted_by_id,
            by_manager,
            by_level,
        })
    }

    fn validate(sorted_by_id: &[Employee]) -> Result<(), HierarchyError> {
        let mut ids = HashSet::new();
        for employee in sorted_by_id {
            if !ids.insert(employee.id) {
                return Err(HierarchyError::DuplicateId(employee.id));
            }
        }

        for employee in sorted_by_id {
            if let Some(manager_id) = employee.manager.manager_id() {
                if !ids.contains(&manager_id) {
                    return Err(HierarchyError::UnknownManager {
                        employee_id: employee.id,
                        manager_id,
                    });
                }
            }
        }

        Ok(())
    }

    /// Group direct reports under their manager's id. Ascending id order
    /// within each list is inherited from the sorted input.
    fn group_by_manager(sorted_by_id: &[Employee]) -> BTreeMap<u32, Vec<Employee>> {
        let mut by_manager: BTreeMap<u32, Vec<Employee>> = BTreeMap::new();
        for employee in sorted_by_id {
            if let Some(manager_id) = employee.manager.manager_id() {
                by_manager
                    .entry(manager_id)
                    .or_default()
                    .push(employee.clone());
            }
        }
        by_manager
    }

    /// Breadth-first level assignment: level 1 is the root alone, level k+1
    /// is the concatenated direct-report lists of everyone at level k. Stops
    /// at the first empty level.
    fn group_by_level(
        sorted_by_id: &[Employee],
        by_manager: &BTreeMap<u32, Vec<Employee>>,
    ) -> Result<BTreeMap<u32, Vec<Employee>>, HierarchyError> {
        let root = sorted_by_id
            .iter()
            .find(|e| e.manager.is_root())
            .ok_or(HierarchyError::MissingRoot)?;

        let mut by_level = BTreeMap::new();
        let mut level: u32 = 1;
        by_level.insert(level, vec![root.clone()]);

        let mut subordinates = by_manager.get(&root.id).cloned().unwrap_or_default();
        while !subordinates.is_empty() {
            level += 1;
            let manager_ids: Vec<u32> = subordinates.iter().map(|e| e.id).collect();
            by_level.insert(level, subordinates);

            subordinates = manager_ids
                .iter()
                .flat_map(|id| by_manager.get(id).cloned().unwrap_or_default())
                .collect();
        }

        Ok(by_level)
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
