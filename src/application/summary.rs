use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::summary::TradeSummary;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

pub struct SummaryUseCase {
    repo: Arc<dyn TradeRepository>,
    starting_capital: Decimal,
}

/// Trades and the statistics computed from that same snapshot.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub trades: Vec<Trade>,
    pub summary: TradeSummary,
}

impl SummaryUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>, starting_capital: Decimal) -> Self {
        Self {
            repo,
            starting_capital,
        }
    }

    /// Recomputed from storage on every call.
    pub fn execute(&self, owner: &OwnerId) -> Result<TradeSummary, DomainError> {
        Ok(self.dashboard(owner)?.summary)
    }

    pub fn dashboard(&self, owner: &OwnerId) -> Result<Dashboard, DomainError> {
        let trades = self.repo.find_trades(&TradeFilter::for_owner(owner.clone()))?;
        let summary = TradeSummary::from_trades(&trades, self.starting_capital);
        Ok(Dashboard { trades, summary })
    }
}
