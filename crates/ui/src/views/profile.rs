use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::User;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Account screen. Re-fetches the profile so a revoked token sends the user
/// back to the login prompt instead of showing stale data.
#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let auth_for_fetch = ctx.auth();
    let resource = use_resource(move || {
        let auth = auth_for_fetch.clone();
        async move {
            if !auth.is_authenticated() {
                return Ok::<_, ViewError>(None);
            }
            let user = auth
                .fetch_current_user()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok(Some(user))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Profile" }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Log In" }
                },
                ViewState::Ready(None) => rsx! {
                    p { "You are not logged in." }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Log In" }
                },
                ViewState::Ready(Some(user)) => rsx! {
                    ProfileCard { user, on_logout: {
                        let ctx = ctx.clone();
                        move |_| {
                            ctx.auth().logout();
                            navigator.replace(Route::Home {});
                        }
                    } }
                },
            }
        }
    }
}

#[component]
fn ProfileCard(user: User, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "card profile-card",
            h3 { "{user.username}" }
            p { class: "profile-email", "{user.email}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Log Out"
            }
        }
    }
}
