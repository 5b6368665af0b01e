//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the Nexon Open API client: account registration and
//! login, the character directory, and user account operations. Transient upstream and
//! database failures are retried through [`retry::RetryContext`].

pub mod auth;
pub mod character;
pub mod retry;
pub mod user;
