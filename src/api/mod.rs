pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;

pub use server::{ApiServer, AppState};
