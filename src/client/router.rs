use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthLayout, Navbar},
    routes::{
        auth::{BossStatus, Settings},
        ForgotPassword, Login, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/forgot-password")]
    ForgotPassword {},

    #[end_layout]

    #[layout(AuthLayout)]

    #[route("/boss-status")]
    BossStatus {},

    #[route("/settings")]
    Settings {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
