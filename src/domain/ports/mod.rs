pub mod identity_provider;
pub mod trade_repository;
