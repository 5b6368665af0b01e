use dioxus::prelude::*;

pub use crate::client::router::Route;

use crate::client::components::MeyoilTitleButton;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                MeyoilTitleButton {}
            }
            div {
                class: "navbar-end gap-2",
                Link { to: Route::Login {}, class: "btn btn-ghost", "로그인" }
                Link { to: Route::Register {}, class: "btn btn-outline", "회원가입" }
            }
        }

        Outlet::<Route> {}
    }
}
