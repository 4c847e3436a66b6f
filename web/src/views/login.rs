use crate::{Route, use_api};
use dioxus::prelude::*;
use types::LoginRequest;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let sign_in = move |_| {
        let client = client.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let request = LoginRequest {
                username: username.read().clone(),
                password: password.read().clone(),
            };
            match client.login(&request).await {
                Ok(_) => {
                    navigator().push(Route::Employees {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "HR Portal" }
                    p { class: "login-subtitle", "Admin Dashboard" }
                }

                if let Some(message) = error.read().as_ref() {
                    div { class: "alert alert-error", "{message}" }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        sign_in(());
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Signing in..." } else { "Sign In" }
                    }
                }

                div { class: "login-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
            }
        }
    }
}
