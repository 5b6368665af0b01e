mod change_password;
mod get_user;
mod settings;

use super::*;
