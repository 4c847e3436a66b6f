use jiff::civil::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    EmployeeDirectory,
    Attendance,
    Department,
    Salary,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::EmployeeDirectory,
        ReportKind::Attendance,
        ReportKind::Department,
        ReportKind::Salary,
    ];

    /// The identifier used in generated filenames and select values.
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::EmployeeDirectory => "employee-directory",
            ReportKind::Attendance => "attendance",
            ReportKind::Department => "department",
            ReportKind::Salary => "salary",
        }
    }

    /// The path segment under `/reports`. Department reports live under the
    /// plural segment even though the filename uses the singular slug.
    fn path_segment(self) -> &'static str {
        match self {
            ReportKind::Department => "departments",
            other => other.slug(),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::EmployeeDirectory => "Employee Directory",
            ReportKind::Attendance => "Attendance Report",
            ReportKind::Department => "Department Report",
            ReportKind::Salary => "Salary Report",
        }
    }

    /// Only attendance reports take a from/to date pair.
    pub fn requires_date_range(self) -> bool {
        matches!(self, ReportKind::Attendance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Pdf, ReportFormat::Excel];

    /// Doubles as the path segment and the filename extension.
    pub fn slug(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

/// A fully specified download request for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub format: ReportFormat,
    pub range: Option<DateRange>,
}

impl ReportRequest {
    /// The request path relative to the API base.
    pub fn path(&self) -> String {
        let base = format!("/reports/{}/{}", self.kind.path_segment(), self.format.slug());
        match self.range {
            Some(range) => format!("{base}?startDate={}&endDate={}", range.from, range.to),
            None => base,
        }
    }

    /// `<kind>_report_<ISO-date>.<format>`, stamped with the download date.
    pub fn file_name(&self, on: Date) -> String {
        format!("{}_report_{}.{}", self.kind.slug(), on, self.format.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_pdf_file_name() {
        let request = ReportRequest {
            kind: ReportKind::Salary,
            format: ReportFormat::Pdf,
            range: None,
        };
        let on = "2024-01-15".parse().unwrap();
        assert_eq!(request.file_name(on), "salary_report_2024-01-15.pdf");
    }

    #[test]
    fn excel_extension_is_the_format_slug() {
        let request = ReportRequest {
            kind: ReportKind::EmployeeDirectory,
            format: ReportFormat::Excel,
            range: None,
        };
        let on = "2025-03-01".parse().unwrap();
        assert_eq!(
            request.file_name(on),
            "employee-directory_report_2025-03-01.excel"
        );
    }

    #[test]
    fn department_path_uses_plural_segment() {
        let request = ReportRequest {
            kind: ReportKind::Department,
            format: ReportFormat::Pdf,
            range: None,
        };
        assert_eq!(request.path(), "/reports/departments/pdf");
    }

    #[test]
    fn attendance_path_carries_the_date_range() {
        let request = ReportRequest {
            kind: ReportKind::Attendance,
            format: ReportFormat::Excel,
            range: Some(DateRange {
                from: "2024-01-01".parse().unwrap(),
                to: "2024-01-31".parse().unwrap(),
            }),
        };
        assert_eq!(
            request.path(),
            "/reports/attendance/excel?startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn only_attendance_requires_a_date_range() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.requires_date_range(), kind == ReportKind::Attendance);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_slug(kind.slug()), Some(kind));
        }
        for format in ReportFormat::ALL {
            assert_eq!(ReportFormat::from_slug(format.slug()), Some(format));
        }
    }
}
