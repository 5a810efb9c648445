pub mod auth;
pub mod sqlite;
