//! Selection-set rules shared by the bulk flows.
//!
//! A selection is a client-local set of employee ids that lives only for the
//! duration of an interaction; it is cleared on successful submission and on
//! department-filter change.

use crate::{Department, Employee};
use std::collections::HashSet;

/// The department narrowing applied to the bulk-marking employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn accepts(self, employee: &Employee) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(dept) => employee.department == dept,
        }
    }
}

/// The currently displayed subset under a filter.
pub fn filtered<'a>(employees: &'a [Employee], filter: DepartmentFilter) -> Vec<&'a Employee> {
    employees.iter().filter(|e| filter.accepts(e)).collect()
}

/// Resolve the target set of a bulk operation.
///
/// With no department filter the target is exactly the manual selection. Under
/// a department filter a non-empty manual selection wins as-is (even ids
/// outside the department); an empty selection falls back to every employee of
/// that department. The fallback is surprising but deliberate, preserved from
/// the shipped behavior.
pub fn resolve_targets(
    filter: DepartmentFilter,
    selection: &HashSet<i64>,
    employees: &[Employee],
) -> Vec<i64> {
    let mut targets: Vec<i64> = match filter {
        DepartmentFilter::All => selection.iter().copied().collect(),
        DepartmentFilter::Only(_) => {
            if selection.is_empty() {
                filtered(employees, filter).iter().map(|e| e.id).collect()
            } else {
                selection.iter().copied().collect()
            }
        }
    };
    targets.sort_unstable();
    targets
}

/// Whether every id of the displayed subset is currently selected, which is
/// what flips the select-all button between "Select All" and "Deselect All".
pub fn all_selected(selection: &HashSet<i64>, subset: &[i64]) -> bool {
    subset.iter().all(|id| selection.contains(id))
}

/// Toggle the displayed subset in or out of the selection.
///
/// If the whole subset is already selected, exactly that subset is removed
/// (selections outside it survive); otherwise the subset is unioned in.
/// Invoking this twice with no intervening change restores the original set.
pub fn toggle_all(selection: &mut HashSet<i64>, subset: &[i64]) {
    if all_selected(selection, subset) {
        for id in subset {
            selection.remove(id);
        }
    } else {
        selection.extend(subset.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, dept: Department) -> Employee {
        Employee {
            id,
            name: name.into(),
            email: format!("{}@corp.example", name.to_lowercase()),
            phone_no: 5550000 + id,
            department: dept,
            salary: 50_000.0,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Alice", Department::IT),
            employee(2, "Bob", Department::IT),
            employee(3, "Cara", Department::HR),
            employee(4, "Dan", Department::HR),
            employee(5, "Eve", Department::Sales),
        ]
    }

    #[test]
    fn all_filter_targets_exactly_the_selection() {
        let selection = HashSet::from([2, 5]);
        let targets = resolve_targets(DepartmentFilter::All, &selection, &roster());
        assert_eq!(targets, vec![2, 5]);
    }

    #[test]
    fn all_filter_with_empty_selection_resolves_empty() {
        let targets = resolve_targets(DepartmentFilter::All, &HashSet::new(), &roster());
        assert!(targets.is_empty());
    }

    #[test]
    fn department_filter_falls_back_to_whole_department() {
        let targets = resolve_targets(
            DepartmentFilter::Only(Department::HR),
            &HashSet::new(),
            &roster(),
        );
        assert_eq!(targets, vec![3, 4]);
    }

    #[test]
    fn manual_selection_wins_over_department_fallback() {
        // Employee 5 is in Sales, yet an HR filter with {5} selected targets
        // exactly {5}: a non-empty selection is taken as-is.
        let selection = HashSet::from([5]);
        let targets = resolve_targets(
            DepartmentFilter::Only(Department::HR),
            &selection,
            &roster(),
        );
        assert_eq!(targets, vec![5]);
    }

    #[test]
    fn empty_department_resolves_empty() {
        let targets = resolve_targets(
            DepartmentFilter::Only(Department::Operations),
            &HashSet::new(),
            &roster(),
        );
        assert!(targets.is_empty());
    }

    #[test]
    fn select_all_toggle_selects_then_deselects_the_subset() {
        let employees = vec![
            employee(1, "Alice", Department::IT),
            employee(2, "Bob", Department::IT),
        ];
        let subset: Vec<i64> = filtered(&employees, DepartmentFilter::Only(Department::IT))
            .iter()
            .map(|e| e.id)
            .collect();

        let mut selection = HashSet::new();
        toggle_all(&mut selection, &subset);
        assert_eq!(selection, HashSet::from([1, 2]));
        toggle_all(&mut selection, &subset);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_preserves_selections_outside_the_subset() {
        let mut selection = HashSet::from([3, 4, 5]);
        let subset = vec![3, 4];
        // Whole subset already selected: remove exactly it.
        toggle_all(&mut selection, &subset);
        assert_eq!(selection, HashSet::from([5]));
        // Toggle again restores the original.
        toggle_all(&mut selection, &subset);
        assert_eq!(selection, HashSet::from([3, 4, 5]));
    }

    #[test]
    fn partial_subset_selection_unions_in() {
        let mut selection = HashSet::from([1]);
        toggle_all(&mut selection, &[1, 2]);
        assert_eq!(selection, HashSet::from([1, 2]));
    }
}
