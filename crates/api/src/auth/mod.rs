//! Password hashing and cookie-session token handling.

pub mod password;
pub mod session;
