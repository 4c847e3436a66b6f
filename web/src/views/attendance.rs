use super::components::{ConfirmModal, Notice, StatCard};
use crate::{use_api, use_error};
use dioxus::prelude::*;
use std::collections::HashSet;
use types::{
    AttendanceDraft, AttendanceRecord, AttendanceStats, AttendanceStatus, Department, Employee,
    parse_check_time,
    selection::{self, DepartmentFilter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Individual,
    Bulk,
}

fn now_local_input() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%dT%H:%M").to_string()
}

fn format_check_time(ts: jiff::Timestamp) -> String {
    ts.strftime("%b %d, %Y %H:%M").to_string()
}

#[component]
pub fn Attendance() -> Element {
    let client = use_api();
    let mut records = use_signal(Vec::<AttendanceRecord>::new);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut loading = use_signal(|| true);
    let mut tab = use_signal(|| Tab::Individual);
    let selection = use_signal(HashSet::<i64>::new);
    let mut notice = use_signal(|| None::<String>);
    let mut error_state = use_error();

    // Both lists load on mount; the record list is also refetchable on demand.
    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                loading.set(true);
                match client.list_employees().await {
                    Ok(list) => employees.set(list),
                    Err(err) => error_state.set_api_error(&err),
                }
                match client.list_attendance().await {
                    Ok(list) => records.set(list),
                    Err(err) => error_state.set_api_error(&err),
                }
                loading.set(false);
            });
        });
    }

    let refresh = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                match client.list_attendance().await {
                    Ok(list) => records.set(list),
                    Err(err) => error_state.set_api_error(&err),
                }
            });
        }
    };

    // Derived from the full in-memory list on every render.
    let stats = AttendanceStats::from_records(&records.read());
    let selected_count = selection.read().len();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Attendance" }
                    p { class: "page-subtitle", "Mark attendance individually or for a whole department." }
                }
                div { class: "page-header-actions",
                    button { class: "btn btn-secondary", onclick: refresh, "Refresh" }
                }
            }

            if let Some(message) = notice.read().as_ref() {
                Notice { message: message.clone(), on_close: move |_| notice.set(None) }
            }

            div { class: "stat-grid",
                StatCard { title: "Present", value: "{stats.present}", accent: "green" }
                StatCard { title: "Absent", value: "{stats.absent}", accent: "red" }
                StatCard { title: "Late", value: "{stats.late}", accent: "amber" }
                StatCard { title: "Attendance Rate", value: "{stats.rate_percent()}%", accent: "blue" }
            }

            div { class: "card tab-bar",
                button {
                    class: if *tab.read() == Tab::Individual { "tab-button active" } else { "tab-button" },
                    onclick: move |_| tab.set(Tab::Individual),
                    "Individual"
                }
                button {
                    class: if *tab.read() == Tab::Bulk { "tab-button active" } else { "tab-button" },
                    onclick: move |_| tab.set(Tab::Bulk),
                    "Bulk Mark ({selected_count})"
                }
            }

            if *tab.read() == Tab::Individual {
                IndividualTab {
                    employees: employees.read().clone(),
                    on_marked: move |record: AttendanceRecord| {
                        records.with_mut(|list| list.push(record));
                        notice.set(Some("Attendance marked".to_string()));
                    },
                }
            } else {
                BulkTab {
                    employees: employees.read().clone(),
                    selection,
                    on_marked: move |marked: Vec<AttendanceRecord>| {
                        let count = marked.len();
                        records.with_mut(|list| list.extend(marked));
                        notice.set(Some(format!("Attendance marked for {count} employee(s)")));
                    },
                }
            }

            div { class: "card",
                h3 { class: "card-title", "Attendance Records" }
                if *loading.read() {
                    div { class: "loading", "Loading records..." }
                } else if records.read().is_empty() {
                    p { class: "text-muted empty-state", "No attendance records found" }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Employee Name" }
                                    th { "Department" }
                                    th { "Check In" }
                                    th { "Check Out" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for record in records.read().iter() {
                                    {
                                        let check_in = format_check_time(record.check_in_time);
                                        let check_out = record
                                            .check_out_time
                                            .map(format_check_time)
                                            .unwrap_or_else(|| "—".to_string());
                                        let badge = format!(
                                            "status-badge status-{}",
                                            record.status.label().to_lowercase()
                                        );
                                        rsx! {
                                            tr { key: "{record.id}",
                                                td { class: "cell-strong", "{record.employee_name}" }
                                                td { "{record.department}" }
                                                td { "{check_in}" }
                                                td { "{check_out}" }
                                                td {
                                                    span { class: "{badge}", "{record.status}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IndividualTab(employees: Vec<Employee>, on_marked: EventHandler<AttendanceRecord>) -> Element {
    let client = use_api();
    let mut employee_id = use_signal(|| 0i64);
    let mut status = use_signal(|| AttendanceStatus::Present);
    let mut check_in = use_signal(now_local_input);
    let mut check_out = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                error.set(None);
                let id = *employee_id.read();
                if id == 0 {
                    error.set(Some("Please select an employee".to_string()));
                    return;
                }
                let check_in_time = match parse_check_time(&check_in.read()) {
                    Ok(ts) => ts,
                    Err(_) => {
                        error.set(Some("Please enter a check-in time".to_string()));
                        return;
                    }
                };
                let check_out_time = {
                    let raw = check_out.read().clone();
                    if raw.is_empty() {
                        None
                    } else {
                        match parse_check_time(&raw) {
                            Ok(ts) => Some(ts),
                            Err(_) => {
                                error.set(Some("Check-out time is not valid".to_string()));
                                return;
                            }
                        }
                    }
                };
                let draft = AttendanceDraft {
                    employee_id: id,
                    check_in_time,
                    check_out_time,
                    status: *status.read(),
                };

                submitting.set(true);
                match client.mark_attendance(&draft).await {
                    Ok(record) => {
                        // Reset to a fresh form and patch the parent list.
                        employee_id.set(0);
                        status.set(AttendanceStatus::Present);
                        check_in.set(now_local_input());
                        check_out.set(String::new());
                        on_marked.call(record);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Mark Individual Attendance" }
            if let Some(message) = error.read().as_ref() {
                div { class: "alert alert-error", "{message}" }
            }
            div { class: "form-grid",
                div { class: "form-group",
                    label { class: "form-label", r#for: "employee", "Employee *" }
                    select {
                        id: "employee",
                        class: "form-input",
                        value: "{employee_id}",
                        onchange: move |e| {
                            if let Ok(id) = e.value().parse() {
                                employee_id.set(id);
                            }
                        },
                        option { value: "0", "Select an employee" }
                        for employee in &employees {
                            option { value: "{employee.id}", "{employee.name} ({employee.department})" }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "status", "Status *" }
                    select {
                        id: "status",
                        class: "form-input",
                        value: "{status.read().label()}",
                        onchange: move |e| {
                            if let Some(parsed) = AttendanceStatus::from_label(&e.value()) {
                                status.set(parsed);
                            }
                        },
                        for option_status in AttendanceStatus::ALL {
                            option { value: "{option_status.label()}", "{option_status}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "check_in", "Check In Time *" }
                    input {
                        id: "check_in",
                        class: "form-input",
                        r#type: "datetime-local",
                        value: "{check_in}",
                        oninput: move |e| check_in.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "check_out", "Check Out Time" }
                    input {
                        id: "check_out",
                        class: "form-input",
                        r#type: "datetime-local",
                        value: "{check_out}",
                        oninput: move |e| check_out.set(e.value()),
                    }
                }
            }
            button {
                class: "btn btn-primary",
                disabled: *submitting.read(),
                onclick: submit,
                if *submitting.read() { "Marking..." } else { "Mark Attendance" }
            }
        }
    }
}

#[component]
fn BulkTab(
    employees: Vec<Employee>,
    selection: Signal<HashSet<i64>>,
    on_marked: EventHandler<Vec<AttendanceRecord>>,
) -> Element {
    let client = use_api();
    let mut selection = selection;
    let mut filter = use_signal(|| DepartmentFilter::All);
    let mut status = use_signal(|| AttendanceStatus::Present);
    let mut check_in = use_signal(now_local_input);
    let mut check_out = use_signal(String::new);
    let mut pending_targets = use_signal(|| None::<Vec<i64>>);
    let mut submitting = use_signal(|| false);
    let mut error_state = use_error();

    let displayed: Vec<Employee> = selection::filtered(&employees, *filter.read())
        .into_iter()
        .cloned()
        .collect();
    let displayed_ids: Vec<i64> = displayed.iter().map(|e| e.id).collect();
    let all_selected = selection::all_selected(&selection.read(), &displayed_ids);

    // Resolve the target set and ask for confirmation. An empty resolved set
    // is rejected before any request goes out.
    let request_confirmation = {
        let employees = employees.clone();
        move |_| {
            let targets =
                selection::resolve_targets(*filter.read(), &selection.read(), &employees);
            if targets.is_empty() {
                error_state.set("Please select at least one employee");
                return;
            }
            pending_targets.set(Some(targets));
        }
    };

    let run_bulk_mark = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let Some(targets) = pending_targets.read().clone() else {
                    return;
                };
                let check_in_time = match parse_check_time(&check_in.read()) {
                    Ok(ts) => ts,
                    Err(_) => {
                        error_state.set("Please enter a check-in time");
                        pending_targets.set(None);
                        return;
                    }
                };
                let check_out_time = {
                    let raw = check_out.read().clone();
                    if raw.is_empty() {
                        None
                    } else {
                        match parse_check_time(&raw) {
                            Ok(ts) => Some(ts),
                            Err(_) => {
                                error_state.set("Check-out time is not valid");
                                pending_targets.set(None);
                                return;
                            }
                        }
                    }
                };
                let shared_status = *status.read();

                submitting.set(true);
                let report =
                    api::batch::run(&targets, api::batch::DEFAULT_CONCURRENCY, |id| {
                        let client = client.clone();
                        let draft = AttendanceDraft {
                            employee_id: id,
                            check_in_time,
                            check_out_time,
                            status: shared_status,
                        };
                        async move { client.mark_attendance(&draft).await }
                    })
                    .await;

                // Records that landed stay landed; nothing is rolled back.
                let marked_ids: HashSet<i64> = report.succeeded_ids().collect();
                selection.with_mut(|s| s.retain(|id| !marked_ids.contains(id)));
                let marked: Vec<AttendanceRecord> = report
                    .succeeded
                    .iter()
                    .map(|(_, record)| record.clone())
                    .collect();

                if report.all_succeeded() {
                    on_marked.call(marked);
                } else {
                    if !marked.is_empty() {
                        on_marked.call(marked);
                    }
                    error_state.set(format!(
                        "Marked {} of {} employee(s). Failed: {}",
                        report.succeeded.len(),
                        report.total(),
                        report.describe_failures(),
                    ));
                }
                submitting.set(false);
                pending_targets.set(None);
            });
        }
    };

    let pending_count = pending_targets.read().as_ref().map(Vec::len);
    let filter_value = match *filter.read() {
        DepartmentFilter::All => "all".to_string(),
        DepartmentFilter::Only(dept) => dept.label().to_string(),
    };

    rsx! {
        div { class: "card",
            h3 { class: "card-title", "Mark Bulk Attendance" }

            div { class: "bulk-filter",
                label { class: "form-label", r#for: "department_filter", "Filter by Department:" }
                select {
                    id: "department_filter",
                    class: "form-input filter-select",
                    value: "{filter_value}",
                    onchange: move |e| {
                        let next = match Department::from_label(&e.value()) {
                            Some(dept) => DepartmentFilter::Only(dept),
                            None => DepartmentFilter::All,
                        };
                        filter.set(next);
                        // Changing the filter always clears the selection.
                        selection.set(HashSet::new());
                    },
                    option { value: "all", "All Departments" }
                    for dept in Department::ALL {
                        option { value: "{dept.label()}", "{dept}" }
                    }
                }
                if *filter.read() != DepartmentFilter::All {
                    button {
                        class: "btn btn-secondary",
                        onclick: {
                            let ids = displayed_ids.clone();
                            move |_| {
                                selection.with_mut(|s| selection::toggle_all(s, &ids));
                            }
                        },
                        if all_selected { "Deselect All" } else { "Select All" }
                    }
                }
            }

            if displayed.is_empty() {
                p { class: "text-muted", "No employees found in this department" }
            } else {
                div { class: "employee-pick-grid",
                    for employee in &displayed {
                        {
                            let id = employee.id;
                            let is_checked = selection.read().contains(&id);
                            rsx! {
                                label {
                                    key: "{id}",
                                    class: if is_checked { "employee-pick selected" } else { "employee-pick" },
                                    input {
                                        r#type: "checkbox",
                                        checked: is_checked,
                                        onchange: move |_| {
                                            selection.with_mut(|s| {
                                                if !s.remove(&id) {
                                                    s.insert(id);
                                                }
                                            });
                                        },
                                    }
                                    span { "{employee.name}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "form-grid",
                div { class: "form-group",
                    label { class: "form-label", r#for: "bulk_status", "Status *" }
                    select {
                        id: "bulk_status",
                        class: "form-input",
                        value: "{status.read().label()}",
                        onchange: move |e| {
                            if let Some(parsed) = AttendanceStatus::from_label(&e.value()) {
                                status.set(parsed);
                            }
                        },
                        for option_status in AttendanceStatus::ALL {
                            option { value: "{option_status.label()}", "{option_status}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "bulk_check_in", "Check In Time *" }
                    input {
                        id: "bulk_check_in",
                        class: "form-input",
                        r#type: "datetime-local",
                        value: "{check_in}",
                        oninput: move |e| check_in.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "bulk_check_out", "Check Out Time" }
                    input {
                        id: "bulk_check_out",
                        class: "form-input",
                        r#type: "datetime-local",
                        value: "{check_out}",
                        oninput: move |e| check_out.set(e.value()),
                    }
                }
            }

            button {
                class: "btn btn-primary",
                disabled: *submitting.read(),
                onclick: request_confirmation,
                "Mark Attendance"
            }
        }

        if let Some(count) = pending_count {
            ConfirmModal {
                title: "Bulk Mark Attendance",
                message: format!("Mark attendance for {count} employee(s)?"),
                confirm_label: "Mark Attendance",
                busy: *submitting.read(),
                on_close: move |_| pending_targets.set(None),
                on_confirm: run_bulk_mark,
            }
        }
    }
}
