use dioxus::prelude::*;

/// One colored summary card for the stat rows above the tables.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] accent: Option<String>) -> Element {
    let class = match &accent {
        Some(accent) => format!("stat-card stat-card-{accent}"),
        None => "stat-card".to_string(),
    };
    rsx! {
        div { class: "{class}",
            h3 { class: "stat-card-title", "{title}" }
            p { class: "stat-card-value", "{value}" }
        }
    }
}

/// A blocking confirmation dialog shared by the destructive and bulk flows.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "{message}" }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}

/// Non-blocking success notice with a dismiss button.
#[component]
pub fn Notice(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice-banner",
            span { "{message}" }
            button {
                class: "notice-close",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}
