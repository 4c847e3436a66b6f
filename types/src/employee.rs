use crate::Department;
use serde::{Deserialize, Serialize};

/// An employee as returned by the backend. Department arrives as its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_no: i64,
    pub department: Department,
    pub salary: f64,
}

impl Employee {
    /// Case-insensitive substring match over the concatenated
    /// name/email/department label, as typed into the directory search box.
    pub fn matches(&self, term: &str) -> bool {
        let haystack = format!("{} {} {}", self.name, self.email, self.department);
        haystack.to_lowercase().contains(&term.to_lowercase())
    }
}

/// The create/update wire shape. Department goes out as its numeric code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone_no: i64,
    #[serde(with = "crate::department::code")]
    pub department: Department,
    pub salary: f64,
}

impl EmployeeDraft {
    /// Prefill for the edit modal: the read-path label collapses back to its
    /// write-path code through the shared mapping.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone_no: employee.phone_no,
            department: employee.department,
            salary: employee.salary,
        }
    }

    /// The employee this draft describes, for patching local state after a
    /// successful update without a full refetch.
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone_no: self.phone_no,
            department: self.department,
            salary: self.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Employee {
        Employee {
            id: 1,
            name: "Alice Carter".into(),
            email: "alice@corp.example".into(),
            phone_no: 5550100,
            department: Department::IT,
            salary: 72_000.0,
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let emp = alice();
        assert!(emp.matches("alice"));
        assert!(emp.matches("CARTER"));
        assert!(emp.matches("corp.example"));
        assert!(emp.matches("it"));
        assert!(emp.matches(""));
        assert!(!emp.matches("finance"));
    }

    #[test]
    fn draft_sends_department_code() {
        let draft = EmployeeDraft::from_employee(&alice());
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["department"], 2);
        assert_eq!(json["phoneNo"], 5550100);
    }

    #[test]
    fn department_code_round_trips_through_edit() {
        // Label "IT" read from the backend must reconstruct code 2 on edit,
        // and code 2 must come back as "IT" after the next fetch.
        let fetched: Employee = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Bob",
            "email": "bob@corp.example",
            "phoneNo": 5550101,
            "department": "IT",
            "salary": 64000.0,
        }))
        .unwrap();
        let draft = EmployeeDraft::from_employee(&fetched);
        assert_eq!(serde_json::to_value(&draft).unwrap()["department"], 2);

        let wire = serde_json::to_string(&draft).unwrap();
        let parsed: EmployeeDraft = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed.department, Department::IT);
        assert_eq!(parsed.into_employee(7), fetched);
    }
}
