//! Shared test helpers.

#![allow(dead_code)]

use rust_decimal::Decimal;
use tradebook::domain::values::owner_id::OwnerId;
use tradebook::TradeBook;

pub const STARTING_CAPITAL: i64 = 1000;

pub fn setup() -> TradeBook {
    TradeBook::open(":memory:", Decimal::from(STARTING_CAPITAL)).unwrap()
}

pub fn owner(id: &str) -> OwnerId {
    OwnerId::new(id).unwrap()
}
