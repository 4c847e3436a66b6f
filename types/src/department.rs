use serde::{Deserialize, Serialize};

/// The fixed set of departments.
///
/// The backend returns the label form ("HR", "IT", ...) on read paths and
/// expects the numeric code (1-5) on write paths. Both directions live here so
/// the mapping cannot drift between forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    HR,
    IT,
    Finance,
    Sales,
    Operations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::HR,
        Department::IT,
        Department::Finance,
        Department::Sales,
        Department::Operations,
    ];

    pub fn code(self) -> u8 {
        match self {
            Department::HR => 1,
            Department::IT => 2,
            Department::Finance => 3,
            Department::Sales => 4,
            Department::Operations => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Department::HR => "HR",
            Department::IT => "IT",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Serde helpers for the numeric-code wire form used by create/update payloads.
pub mod code {
    use super::Department;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dept: &Department, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(dept.code())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Department, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Department::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown department code {code}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_label_round_trip() {
        for dept in Department::ALL {
            assert_eq!(Department::from_code(dept.code()), Some(dept));
            assert_eq!(Department::from_label(dept.label()), Some(dept));
        }
    }

    #[test]
    fn codes_match_backend_contract() {
        assert_eq!(Department::HR.code(), 1);
        assert_eq!(Department::IT.code(), 2);
        assert_eq!(Department::Finance.code(), 3);
        assert_eq!(Department::Sales.code(), 4);
        assert_eq!(Department::Operations.code(), 5);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Department::from_code(0), None);
        assert_eq!(Department::from_code(6), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Department::Operations).unwrap();
        assert_eq!(json, "\"Operations\"");
        let back: Department = serde_json::from_str("\"Finance\"").unwrap();
        assert_eq!(back, Department::Finance);
    }
}
