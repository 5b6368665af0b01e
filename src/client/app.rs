use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{router::Route, store::session::SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    // Renew the session once per page load, which also tells us who is logged in
    #[cfg(feature = "web")]
    use_future(move || async move {
        use crate::client::util::api::auth::refresh_session;

        let user = match refresh_session().await {
            Ok(user) => user,
            Err(err) => {
                tracing::error!("Failed to fetch session user: {}", err);
                None
            }
        };

        session.set(SessionState::fetched(user));
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
