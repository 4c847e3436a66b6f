use super::components::{ConfirmModal, Notice, StatCard};
use crate::{use_api, use_error};
use dioxus::prelude::*;
use std::collections::HashSet;
use types::{Department, Employee, EmployeeDraft, selection};

#[component]
pub fn Employees() -> Element {
    let client = use_api();
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(HashSet::<i64>::new);
    let mut editing = use_signal(|| None::<Employee>);
    let mut pending_delete = use_signal(|| None::<i64>);
    let mut confirm_bulk = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);
    let mut error_state = use_error();

    // Fetch the full list on mount; there is no pagination.
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
                loading.set(false);
            });
        });
    }

    // Explicit reconciliation fetch; mutations otherwise patch local state.
    let refresh = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                match client.list_employees().await {
                    Ok(list) => employees.set(list),
                    Err(err) => error_state.set_api_error(&err),
                }
            });
        }
    };

    let confirm_single_delete = {
        let client = client.clone();
        move |id: i64| {
            let client = client.clone();
            spawn(async move {
                deleting.set(true);
                match client.delete_employee(id).await {
                    Ok(()) => {
                        employees.with_mut(|list| list.retain(|e| e.id != id));
                        selected.with_mut(|s| {
                            s.remove(&id);
                        });
                        notice.set(Some("Employee deleted".to_string()));
                    }
                    Err(err) => error_state.set_api_error(&err),
                }
                deleting.set(false);
                pending_delete.set(None);
            });
        }
    };

    let run_bulk_delete = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let ids: Vec<i64> = {
                    let mut ids: Vec<i64> = selected.read().iter().copied().collect();
                    ids.sort_unstable();
                    ids
                };
                deleting.set(true);
                let report = api::batch::run(&ids, api::batch::DEFAULT_CONCURRENCY, |id| {
                    let client = client.clone();
                    async move { client.delete_employee(id).await }
                })
                .await;

                let removed: HashSet<i64> = report.succeeded_ids().collect();
                employees.with_mut(|list| list.retain(|e| !removed.contains(&e.id)));
                selected.with_mut(|s| s.retain(|id| !removed.contains(id)));

                if report.all_succeeded() {
                    notice.set(Some(format!("{} employee(s) deleted", report.total())));
                } else {
                    error_state.set(format!(
                        "Deleted {} of {} employee(s). Failed: {}",
                        report.succeeded.len(),
                        report.total(),
                        report.describe_failures(),
                    ));
                }
                deleting.set(false);
                confirm_bulk.set(false);
            });
        }
    };

    let term = search.read().clone();
    let filtered: Vec<Employee> = employees
        .read()
        .iter()
        .filter(|e| e.matches(&term))
        .cloned()
        .collect();
    let filtered_ids: Vec<i64> = filtered.iter().map(|e| e.id).collect();
    let all_checked =
        !filtered_ids.is_empty() && selection::all_selected(&selected.read(), &filtered_ids);
    let total = employees.read().len();
    let department_count = employees
        .read()
        .iter()
        .map(|e| e.department)
        .collect::<HashSet<_>>()
        .len();
    let selected_count = selected.read().len();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "View Employees" }
                    p { class: "page-subtitle", "Search, edit, and manage employee records." }
                }
                div { class: "page-header-actions",
                    button { class: "btn btn-secondary", onclick: refresh, "Refresh" }
                    if selected_count > 0 {
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| confirm_bulk.set(true),
                            "Delete Selected ({selected_count})"
                        }
                    }
                }
            }

            if let Some(message) = notice.read().as_ref() {
                Notice { message: message.clone(), on_close: move |_| notice.set(None) }
            }

            div { class: "stat-grid",
                StatCard { title: "Total Employees", value: "{total}", accent: "blue" }
                StatCard { title: "Departments", value: "{department_count}", accent: "amber" }
            }

            div { class: "card search-card",
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Search employees by name, email, or department...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading employees..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Department" }
                                    th { "Salary" }
                                    th { "Actions" }
                                    th { class: "checkbox-column",
                                        input {
                                            r#type: "checkbox",
                                            checked: all_checked,
                                            title: "Select all displayed employees",
                                            onchange: {
                                                let ids = filtered_ids.clone();
                                                move |_| {
                                                    let ids = ids.clone();
                                                    selected.with_mut(|s| selection::toggle_all(s, &ids));
                                                }
                                            },
                                        }
                                    }
                                }
                            }
                            tbody {
                                for employee in filtered {
                                    {
                                        let id = employee.id;
                                        let is_checked = selected.read().contains(&id);
                                        let row = employee.clone();
                                        rsx! {
                                            tr { key: "{id}",
                                                td { class: "cell-strong", "{employee.name}" }
                                                td { class: "text-muted", "{employee.email}" }
                                                td { "{employee.phone_no}" }
                                                td { "{employee.department}" }
                                                td { {format_salary(employee.salary)} }
                                                td {
                                                    button {
                                                        class: "btn btn-link",
                                                        onclick: move |_| editing.set(Some(row.clone())),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-link btn-link-danger",
                                                        onclick: move |_| pending_delete.set(Some(id)),
                                                        "Delete"
                                                    }
                                                }
                                                td { class: "checkbox-column",
                                                    input {
                                                        r#type: "checkbox",
                                                        checked: is_checked,
                                                        onchange: move |_| {
                                                            selected.with_mut(|s| {
                                                                if !s.remove(&id) {
                                                                    s.insert(id);
                                                                }
                                                            });
                                                        },
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

        if let Some(employee) = editing.read().clone() {
            EditEmployeeModal {
                employee,
                on_close: move |_| editing.set(None),
                on_saved: move |updated: Employee| {
                    employees.with_mut(|list| {
                        if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
                            *slot = updated.clone();
                        }
                    });
                    editing.set(None);
                    notice.set(Some("Employee updated".to_string()));
                },
            }
        }

        if let Some(id) = *pending_delete.read() {
            ConfirmModal {
                title: "Delete Employee",
                message: "Are you sure you want to delete this employee? This action cannot be undone.",
                confirm_label: "Delete",
                busy: *deleting.read(),
                on_close: move |_| pending_delete.set(None),
                on_confirm: {
                    let mut confirm = confirm_single_delete.clone();
                    move |_| confirm(id)
                },
            }
        }

        if *confirm_bulk.read() {
            ConfirmModal {
                title: "Delete Selected Employees",
                message: format!("Are you sure you want to delete {selected_count} selected employee(s)?"),
                confirm_label: "Delete",
                busy: *deleting.read(),
                on_close: move |_| confirm_bulk.set(false),
                on_confirm: run_bulk_delete,
            }
        }
    }
}

fn format_salary(salary: f64) -> String {
    let whole = salary.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[component]
fn EditEmployeeModal(
    employee: Employee,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Employee>,
) -> Element {
    let client = use_api();
    // The read-path label comes back as its write-path code via the shared
    // mapping when the modal opens.
    let mut name = use_signal(|| employee.name.clone());
    let mut email = use_signal(|| employee.email.clone());
    let mut phone = use_signal(|| employee.phone_no.to_string());
    let mut department_code = use_signal(|| employee.department.code());
    let mut salary = use_signal(|| employee.salary.to_string());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let id = employee.id;

    let save = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                error.set(None);
                let Ok(phone_no) = phone.read().trim().parse::<i64>() else {
                    error.set(Some("Phone must be a number".to_string()));
                    return;
                };
                let Ok(salary_value) = salary.read().trim().parse::<f64>() else {
                    error.set(Some("Salary must be a number".to_string()));
                    return;
                };
                let Some(department) = Department::from_code(*department_code.read()) else {
                    error.set(Some("Please select a department".to_string()));
                    return;
                };
                let draft = EmployeeDraft {
                    name: name.read().clone(),
                    email: email.read().clone(),
                    phone_no,
                    department,
                    salary: salary_value,
                };

                saving.set(true);
                match client.update_employee(id, &draft).await {
                    Ok(()) => on_saved.call(draft.into_employee(id)),
                    // Leave the modal open with the server's message.
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Edit Employee" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    if let Some(message) = error.read().as_ref() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_name", "Name *" }
                        input {
                            id: "edit_name",
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_email", "Email *" }
                        input {
                            id: "edit_email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_phone", "Phone *" }
                        input {
                            id: "edit_phone",
                            class: "form-input",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_department", "Department *" }
                        select {
                            id: "edit_department",
                            class: "form-input",
                            value: "{department_code}",
                            onchange: move |e| {
                                if let Ok(code) = e.value().parse() {
                                    department_code.set(code);
                                }
                            },
                            for dept in Department::ALL {
                                option { value: "{dept.code()}", "{dept}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit_salary", "Salary *" }
                        input {
                            id: "edit_salary",
                            class: "form-input",
                            r#type: "number",
                            value: "{salary}",
                            oninput: move |e| salary.set(e.value()),
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: *saving.read(),
                        onclick: save,
                        if *saving.read() { "Updating..." } else { "Update Employee" }
                    }
                }
            }
        }
    }
}
