//! Password hashing, session tokens and the session cookie.

pub mod extract;
pub mod password;
pub mod session;

pub use extract::{Caller, RecruiterCaller};
