// Accounts: registration, login/logout, and profile updates.

pub mod handlers;
pub mod profile;
