mod attendance;
mod auth;
mod department;
mod employee;
mod report;
pub mod selection;
mod session;

pub use attendance::{
    AttendanceDraft, AttendanceRecord, AttendanceStats, AttendanceStatus, parse_check_time,
};
pub use auth::{LoginRequest, LoginResponse, RegisterForm, RegisterRequest};
pub use department::Department;
pub use employee::{Employee, EmployeeDraft};
pub use report::{DateRange, ReportFormat, ReportKind, ReportRequest};
pub use session::Session;
