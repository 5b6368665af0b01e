use dioxus::prelude::*;

/// Inline error text, rendered only while there is a message.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { role: "alert", class: "alert alert-error alert-soft text-sm",
                "{message}"
            }
        }
    )
}
