//! Logged in user, shared with every page through a context signal.
//!
//! Pages read and update the session through `use_context::<Signal<SessionState>>()`
//! instead of reaching into browser storage.

use crate::model::user::UserDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserDto>,
    /// Whether the server has been asked about the session yet
    pub fetched: bool,
}

impl SessionState {
    pub fn fetched(user: Option<UserDto>) -> Self {
        Self {
            user,
            fetched: true,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Known to be logged out, as opposed to not fetched yet.
    pub fn is_logged_out(&self) -> bool {
        self.fetched && self.user.is_none()
    }

    pub fn main_character_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.main_character_name.as_str())
    }
}
