//! Session holder for the maraude coordination backend.
//!
//! Owns the bearer token and current-user state, the login/register/logout
//! round-trips, and the single-flight token refresh every authorized
//! request falls back to on a 401.

pub mod authorized;
pub mod config;
pub mod data;
pub mod errors;
pub mod session;
pub mod store;

pub use authorized::AuthorizedApi;
pub use errors::{ApiError, FieldErrors};
pub use session::Session;
