pub mod alert;
pub mod auth;
pub mod boss_status;
pub mod meyoil_title;
pub mod navbar;
pub mod page;

pub use alert::ErrorAlert;
pub use meyoil_title::MeyoilTitleButton;
pub use navbar::Navbar;
pub use page::Page;
