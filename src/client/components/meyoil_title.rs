use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn MeyoilTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Login {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl font-bold text-orange-500",
                    "메요일"
                }
                p { class: "text-xs",
                    "v0.1.0-Alpha.1"
                }
            }
        }
    )
}
