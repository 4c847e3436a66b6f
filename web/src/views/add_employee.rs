use super::components::Notice;
use crate::use_api;
use dioxus::prelude::*;
use types::{Department, EmployeeDraft};

#[component]
pub fn AddEmployee() -> Element {
    let client = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut department_code = use_signal(|| 0u8);
    let mut salary = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let mut reset = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        department_code.set(0);
        salary.set(String::new());
    };

    let submit = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                error.set(None);
                if name.read().is_empty() || email.read().is_empty() {
                    error.set(Some("Name and email are required".to_string()));
                    return;
                }
                let Some(department) = Department::from_code(*department_code.read()) else {
                    error.set(Some("Please select a department".to_string()));
                    return;
                };
                let Ok(phone_no) = phone.read().trim().parse::<i64>() else {
                    error.set(Some("Phone must be a number".to_string()));
                    return;
                };
                let Ok(salary_value) = salary.read().trim().parse::<f64>() else {
                    error.set(Some("Salary must be a number".to_string()));
                    return;
                };
                let draft = EmployeeDraft {
                    name: name.read().clone(),
                    email: email.read().clone(),
                    phone_no,
                    department,
                    salary: salary_value,
                };

                submitting.set(true);
                match client.create_employee(&draft).await {
                    Ok(created) => {
                        notice.set(Some(format!("Employee {} added", created.name)));
                        reset();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Add Employee" }
                p { class: "page-subtitle", "Create a new employee record." }
            }

            if let Some(message) = notice.read().as_ref() {
                Notice { message: message.clone(), on_close: move |_| notice.set(None) }
            }

            div { class: "card form-card",
                if let Some(message) = error.read().as_ref() {
                    div { class: "alert alert-error", "{message}" }
                }
                div { class: "form-grid",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "name", "Name *" }
                        input {
                            id: "name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Enter first name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email *" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "employee@company.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "phone", "Phone *" }
                        input {
                            id: "phone",
                            class: "form-input",
                            r#type: "tel",
                            placeholder: "5550000000",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "department", "Department *" }
                        select {
                            id: "department",
                            class: "form-input",
                            value: "{department_code}",
                            onchange: move |e| {
                                if let Ok(code) = e.value().parse() {
                                    department_code.set(code);
                                }
                            },
                            option { value: "0", "Select Department" }
                            for dept in Department::ALL {
                                option { value: "{dept.code()}", "{dept}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "salary", "Salary *" }
                        input {
                            id: "salary",
                            class: "form-input",
                            r#type: "number",
                            placeholder: "50000",
                            value: "{salary}",
                            oninput: move |e| salary.set(e.value()),
                        }
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: *submitting.read(),
                        onclick: submit,
                        if *submitting.read() { "Adding..." } else { "Add Employee" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| reset(),
                        "Reset"
                    }
                }
            }
        }
    }
}
