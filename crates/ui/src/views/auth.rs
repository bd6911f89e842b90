use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::{LoginCredentials, RegisterCredentials};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let on_login = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let auth = ctx.auth();
            let credentials = LoginCredentials {
                email: email().trim().to_string(),
                password: password(),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                error.set(Some(ViewError::Api(
                    "Email and password are required.".to_string(),
                )));
                return;
            }
            spawn(async move {
                busy.set(true);
                match auth.login(&credentials).await {
                    Ok(_) => {
                        navigator.replace(Route::Home {});
                    }
                    Err(err) => {
                        busy.set(false);
                        error.set(Some(ViewError::from_api(&err)));
                    }
                }
            });
        })
    };

    rsx! {
        div { class: "page auth-page",
            header { class: "view-header",
                h2 { class: "view-title", "Log In" }
            }
            div { class: "view-divider" }

            div { class: "auth-card",
                label { class: "field-label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "field-input",
                    r#type: "email",
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "field-label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "field-input",
                    r#type: "password",
                    value: "{password()}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(err) = error() {
                    p { class: "view-error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: move |_| on_login.call(()),
                    if busy() { "Logging in..." } else { "Log In" }
                }
                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let on_register = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let auth = ctx.auth();
            let credentials = RegisterCredentials {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            if credentials.username.is_empty()
                || credentials.email.is_empty()
                || credentials.password.is_empty()
            {
                error.set(Some(ViewError::Api("All fields are required.".to_string())));
                return;
            }
            spawn(async move {
                busy.set(true);
                match auth.register(&credentials).await {
                    Ok(_) => {
                        navigator.replace(Route::Home {});
                    }
                    Err(err) => {
                        busy.set(false);
                        error.set(Some(ViewError::from_api(&err)));
                    }
                }
            });
        })
    };

    rsx! {
        div { class: "page auth-page",
            header { class: "view-header",
                h2 { class: "view-title", "Register" }
            }
            div { class: "view-divider" }

            div { class: "auth-card",
                label { class: "field-label", r#for: "register-username", "Username" }
                input {
                    id: "register-username",
                    class: "field-input",
                    value: "{username()}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { class: "field-label", r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    class: "field-input",
                    r#type: "email",
                    value: "{email()}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "field-label", r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    class: "field-input",
                    r#type: "password",
                    value: "{password()}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(err) = error() {
                    p { class: "view-error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: move |_| on_register.call(()),
                    if busy() { "Creating account..." } else { "Create Account" }
                }
                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login {}, "Log In" }
                }
            }
        }
    }
}
