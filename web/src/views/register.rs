use crate::{Route, use_api};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use types::RegisterForm;

/// How long the success message stays up before returning to login.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let create_account = move |_| {
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let form = RegisterForm {
                username: username.read().clone(),
                email: email.read().clone(),
                password: password.read().clone(),
                confirm_password: confirm_password.read().clone(),
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            submitting.set(true);
            match client.register(&request).await {
                Ok(()) => {
                    success.set(Some(
                        "Registration successful! Redirecting to login...".to_string(),
                    ));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigator().push(Route::Login {});
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
                    p { class: "login-subtitle", "Create Your Account" }
                }

                if let Some(message) = error.read().as_ref() {
                    div { class: "alert alert-error", "{message}" }
                }
                if let Some(message) = success.read().as_ref() {
                    div { class: "alert alert-success", "{message}" }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        create_account(());
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Choose a username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Create a password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        p { class: "form-hint", "Minimum 6 characters" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "confirm_password", "Confirm Password" }
                        input {
                            id: "confirm_password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Re-enter your password",
                            value: "{confirm_password}",
                            oninput: move |e| confirm_password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Creating account..." } else { "Create Account" }
                    }
                }

                div { class: "login-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login here" }
                }
            }
        }
    }
}
