pub mod auth;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod register;

pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
