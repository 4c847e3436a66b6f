use dioxus::prelude::*;

mod views;

use api::ApiClient;
use views::{AddEmployee, Attendance, Employees, Login, Register, Reports};

/// Base path of the HR backend, overridable at build time.
const API_BASE_URL: &str = match option_env!("HR_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5119/api",
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(DashboardLayout)]
        #[route("/")]
        Employees {},
        #[route("/employees/add")]
        AddEmployee {},
        #[route("/attendance")]
        Attendance {},
        #[route("/reports")]
        Reports {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(API_BASE_URL));

    rsx! {
        document::Title { "HR Portal" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// The shared API client, provided at the application root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<String>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(error.into()));
    }

    pub fn set_api_error(&mut self, err: &api::Error) {
        // A 401 means the session is gone; send the operator back to login.
        if err.status() == Some(401) {
            navigator().push(Route::Login {});
            return;
        }
        self.0.set(Some(err.to_string()));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(message) = error.as_ref() {
        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    span { class: "error-banner-message", "{message}" }
                    button {
                        class: "error-banner-close",
                        onclick: move |_| error_state.clear(),
                        "×"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn DashboardLayout() -> Element {
    let client = use_api();
    use_context_provider(|| ErrorState(Signal::new(None)));

    let Some(session) = client.session() else {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "loading", "Redirecting to login..." }
        };
    };

    let initial = session
        .username
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();
    let today = jiff::Zoned::now().strftime("%A, %B %d, %Y").to_string();
    let logout_client = client.clone();

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "HR Portal" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Employees {}, "View Employees" }
                    NavLink { to: Route::AddEmployee {}, "Add Employee" }
                    NavLink { to: Route::Attendance {}, "Attendance" }
                    NavLink { to: Route::Reports {}, "Reports" }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-avatar", "{initial}" }
                        div { class: "sidebar-user-info",
                            div { class: "sidebar-user-name", "{session.username}" }
                            div { class: "sidebar-user-role", "Admin" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: move |_| {
                            logout_client.logout();
                            navigator().push(Route::Login {});
                        },
                        "Sign out"
                    }
                }
            }
            // Main content
            main { class: "main-content",
                header { class: "content-header",
                    span { class: "content-date", "{today}" }
                }
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
