pub mod summary;
pub mod trade;
