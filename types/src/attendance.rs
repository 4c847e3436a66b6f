use crate::Department;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Leave,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Leave => "Leave",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An attendance record as returned by the backend, with the employee name and
/// department denormalized onto it. Immutable once created; there is no edit
/// or delete flow for attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub department: Department,
    pub check_in_time: Timestamp,
    pub check_out_time: Option<Timestamp>,
    pub status: AttendanceStatus,
}

/// The create wire shape. An absent check-out is `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    pub employee_id: i64,
    pub check_in_time: Timestamp,
    pub check_out_time: Option<Timestamp>,
    pub status: AttendanceStatus,
}

/// Parse the value of a `datetime-local` input (`YYYY-MM-DDTHH:MM`) into a
/// UTC timestamp for the wire.
pub fn parse_check_time(input: &str) -> Result<Timestamp, jiff::Error> {
    let civil = DateTime::strptime("%Y-%m-%dT%H:%M", input)?;
    Ok(civil.to_zoned(TimeZone::UTC)?.timestamp())
}

/// Counts derived from the full in-memory record list on every render; the
/// backend has no aggregation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceStats {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub total: usize,
}

impl AttendanceStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::Leave => {}
            }
        }
        stats
    }

    /// Attendance rate = round(100 * (present + late) / total), 0 when empty.
    pub fn rate_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let rate = (self.present + self.late) as f64 / self.total as f64;
        (rate * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            employee_id: 1,
            employee_name: "Alice".into(),
            department: Department::IT,
            check_in_time: "2024-01-15T09:00:00Z".parse().unwrap(),
            check_out_time: None,
            status,
        }
    }

    #[test]
    fn parses_datetime_local_input() {
        let ts = parse_check_time("2024-01-15T09:30").unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T09:30:00Z");
        assert!(parse_check_time("not a time").is_err());
        assert!(parse_check_time("").is_err());
    }

    #[test]
    fn missing_check_out_is_null_on_the_wire() {
        let draft = AttendanceDraft {
            employee_id: 3,
            check_in_time: "2024-01-15T09:00:00Z".parse().unwrap(),
            check_out_time: None,
            status: AttendanceStatus::Present,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["checkOutTime"], serde_json::Value::Null);
        assert_eq!(json["status"], "Present");
        assert_eq!(json["checkInTime"], "2024-01-15T09:00:00Z");
    }

    #[test]
    fn stats_count_by_status() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Absent),
            record(AttendanceStatus::Leave),
        ];
        let stats = AttendanceStats::from_records(&records);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.total, 5);
        // (2 + 1) / 5 = 60%
        assert_eq!(stats.rate_percent(), 60);
    }

    #[test]
    fn empty_record_list_has_zero_rate() {
        assert_eq!(AttendanceStats::from_records(&[]).rate_percent(), 0);
    }
}
