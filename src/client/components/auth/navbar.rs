use dioxus::prelude::*;

use crate::client::{
    components::MeyoilTitleButton, router::Route, store::session::SessionState,
};

#[component]
pub fn AuthNavbar() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let name = session
        .read()
        .main_character_name()
        .unwrap_or("사용자")
        .to_string();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-6",
                MeyoilTitleButton {}
                Link {
                    to: Route::BossStatus {},
                    class: "font-medium",
                    active_class: "text-orange-500",
                    "보돌 현황"
                }
            }
            div {
                class: "navbar-end gap-4",
                span { class: "text-sm", "{name}님" }
                Link {
                    to: Route::Settings {},
                    active_class: "text-orange-500",
                    "설정"
                }
                div { class: "h-10",
                    a { href: "/api/auth/logout",
                        button {
                            class: "btn btn-outline",
                            "로그아웃"
                        }
                    }
                }
            }
        }
    }
}
