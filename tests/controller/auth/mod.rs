//! Tests for authentication controller endpoints.
//!
//! Covers character lookup by API key, registration, login, logout, session refresh and
//! password reset.

mod list_characters;
mod login;
mod logout;
mod register;
mod reset_password;
mod user;

use super::*;
