mod components;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod employees;
pub use employees::Employees;

mod add_employee;
pub use add_employee::AddEmployee;

mod attendance;
pub use attendance::Attendance;

mod reports;
pub use reports::Reports;
