use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::trade_patch::TradePatch;
use crate::domain::values::trade_status::TradeStatus;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Owner-scoped CRUD over trades. A trade that exists under another owner is
/// reported exactly like a missing one.
pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self, owner: &OwnerId, status: Option<TradeStatus>) -> Result<Vec<Trade>, DomainError> {
        let trades = self
            .repo
            .find_trades(&TradeFilter::for_owner(owner.clone()).with_status(status))?;
        tracing::debug!(owner = %owner, count = trades.len(), "Listed trades");
        Ok(trades)
    }

    pub fn create(&self, owner: &OwnerId, item_name: String, buy_price: Decimal) -> Result<Trade, DomainError> {
        let trade = Trade::new(owner.clone(), item_name, buy_price)?;
        self.repo.insert_trade(&trade)?;
        tracing::info!(owner = %owner, trade_id = %trade.id, item = %trade.item_name, "Trade created");
        Ok(trade)
    }

    pub fn get(&self, owner: &OwnerId, id: &str) -> Result<Trade, DomainError> {
        self.repo
            .get_trade(owner, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))
    }

    pub fn update(&self, owner: &OwnerId, id: &str, patch: TradePatch) -> Result<Trade, DomainError> {
        let now = Utc::now();
        let mut was_sold = false;
        let trade = self.repo.modify_trade(owner, id, &mut |trade: &mut Trade| {
            was_sold = trade.is_sold();
            trade.apply_patch(patch.clone(), now)
        })?;

        if !was_sold && trade.is_sold() {
            tracing::info!(owner = %owner, trade_id = %trade.id, profit = ?trade.profit(), "Trade sold");
        } else {
            tracing::info!(owner = %owner, trade_id = %trade.id, "Trade updated");
        }
        Ok(trade)
    }

    pub fn delete(&self, owner: &OwnerId, id: &str) -> Result<(), DomainError> {
        self.repo.delete_trade(owner, id)?;
        tracing::info!(owner = %owner, trade_id = %id, "Trade deleted");
        Ok(())
    }

    pub fn health(&self) -> Result<(), DomainError> {
        self.repo.ping()
    }
}
