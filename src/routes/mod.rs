//! HTTP route handlers.

pub mod accounts;
pub mod health;
pub mod history;
pub mod login;
pub mod logout;
pub mod urls;
pub mod verify;
