use super::components::Notice;
use crate::{use_api, use_error};
use dioxus::document::eval;
use dioxus::prelude::*;
use types::{DateRange, ReportFormat, ReportKind, ReportRequest};

/// Hand the report bytes to the browser as a file save. The framework has no
/// download primitive, so this goes through an object-URL anchor in JS.
fn save_file(bytes: &[u8], file_name: &str) {
    use base64::Engine;
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    let js = format!(
        r#"
        const bytes = Uint8Array.from(atob("{payload}"), c => c.charCodeAt(0));
        const url = URL.createObjectURL(new Blob([bytes]));
        const link = document.createElement("a");
        link.href = url;
        link.download = "{file_name}";
        document.body.appendChild(link);
        link.click();
        link.remove();
        URL.revokeObjectURL(url);
        "#
    );
    eval(&js);
}

struct ReportInfo {
    kind: ReportKind,
    description: &'static str,
}

const REPORT_INFO: [ReportInfo; 4] = [
    ReportInfo {
        kind: ReportKind::EmployeeDirectory,
        description: "Complete list of all employees with details",
    },
    ReportInfo {
        kind: ReportKind::Attendance,
        description: "Attendance records for a date range",
    },
    ReportInfo {
        kind: ReportKind::Department,
        description: "Department-wise employee breakdown",
    },
    ReportInfo {
        kind: ReportKind::Salary,
        description: "Comprehensive salary information by department",
    },
];

#[component]
pub fn Reports() -> Element {
    let client = use_api();
    let mut kind = use_signal(|| ReportKind::EmployeeDirectory);
    let mut format = use_signal(|| ReportFormat::Pdf);
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut generating = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);
    let mut error_state = use_error();

    let generate = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let selected_kind = *kind.read();
                let range = if selected_kind.requires_date_range() {
                    // Only "both present" is checked; range order is the
                    // backend's problem.
                    if from.read().is_empty() || to.read().is_empty() {
                        error_state
                            .set("Please select both From and To dates for attendance reports");
                        return;
                    }
                    let (Ok(from), Ok(to)) = (from.read().parse(), to.read().parse()) else {
                        error_state.set("Report dates must be valid dates");
                        return;
                    };
                    Some(DateRange { from, to })
                } else {
                    None
                };
                let request = ReportRequest {
                    kind: selected_kind,
                    format: *format.read(),
                    range,
                };

                generating.set(true);
                match client.download_report(&request).await {
                    Ok(bytes) => {
                        let file_name = request.file_name(jiff::Zoned::now().date());
                        save_file(&bytes, &file_name);
                        notice.set(Some(format!("{file_name} downloaded")));
                    }
                    Err(err) => error_state.set_api_error(&err),
                }
                generating.set(false);
            });
        }
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Reports" }
                p { class: "page-subtitle", "Generate and download reports from the backend." }
            }

            if let Some(message) = notice.read().as_ref() {
                Notice { message: message.clone(), on_close: move |_| notice.set(None) }
            }

            div { class: "card",
                h3 { class: "card-title", "Generate Reports" }
                div { class: "form-grid",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "report_type", "Report Type *" }
                        select {
                            id: "report_type",
                            class: "form-input",
                            value: "{kind.read().slug()}",
                            onchange: move |e| {
                                if let Some(parsed) = ReportKind::from_slug(&e.value()) {
                                    kind.set(parsed);
                                }
                            },
                            for option_kind in ReportKind::ALL {
                                option { value: "{option_kind.slug()}", "{option_kind.label()}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "report_format", "Report Format *" }
                        select {
                            id: "report_format",
                            class: "form-input",
                            value: "{format.read().slug()}",
                            onchange: move |e| {
                                if let Some(parsed) = ReportFormat::from_slug(&e.value()) {
                                    format.set(parsed);
                                }
                            },
                            for option_format in ReportFormat::ALL {
                                option { value: "{option_format.slug()}", "{option_format.label()}" }
                            }
                        }
                    }
                    if kind.read().requires_date_range() {
                        div { class: "form-group",
                            label { class: "form-label", r#for: "from_date", "From Date *" }
                            input {
                                id: "from_date",
                                class: "form-input",
                                r#type: "date",
                                value: "{from}",
                                oninput: move |e| from.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "to_date", "To Date *" }
                            input {
                                id: "to_date",
                                class: "form-input",
                                r#type: "date",
                                value: "{to}",
                                oninput: move |e| to.set(e.value()),
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: *generating.read(),
                    onclick: generate,
                    if *generating.read() { "Generating..." } else { "Generate & Download Report" }
                }
            }

            h3 { class: "section-header", "Available Reports" }
            div { class: "report-info-grid",
                for info in REPORT_INFO {
                    div { class: "card report-info-card",
                        h4 { "{info.kind.label()}" }
                        p { class: "text-muted", "{info.description}" }
                        p { class: "text-sm", "Formats: PDF, Excel" }
                    }
                }
            }
        }
    }
}
