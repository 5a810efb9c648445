pub mod owner_id;
pub mod summary;
pub mod trade_patch;
pub mod trade_status;
