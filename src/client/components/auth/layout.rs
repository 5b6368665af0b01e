use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthNavbar, Page},
    router::Route,
    store::session::SessionState,
};

/// Wraps pages that require a logged in user.
///
/// Sends the visitor to the login page once the session is known to be empty.
#[component]
pub fn AuthLayout() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    use_effect(move || {
        if session.read().is_logged_out() {
            navigator.replace(Route::Login {});
        }
    });

    rsx!(
        AuthNavbar {}
        if session.read().is_logged_in() {
            Outlet::<Route> {}
        } else {
            Page { class: "flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        }
    )
}
