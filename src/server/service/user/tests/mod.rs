use meyoil_test_utils::prelude::*;

mod user;
mod user_character;
