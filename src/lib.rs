pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::summary::{Dashboard, SummaryUseCase};
use crate::application::trade::TradeUseCase;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::TradeRepository;
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::summary::TradeSummary;
use crate::domain::values::trade_patch::TradePatch;
use crate::domain::values::trade_status::TradeStatus;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct TradeBook {
    trade_uc: TradeUseCase,
    summary_uc: SummaryUseCase,
}

impl TradeBook {
    pub fn new(config: &config::Config) -> Result<Self, DomainError> {
        Self::open(&config.db_path, config.starting_capital)
    }

    pub fn open(db_path: &str, starting_capital: Decimal) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;

        let repo: Arc<dyn TradeRepository> = Arc::new(SqliteTradeRepo::new(conn));
        Ok(Self::with_repository(repo, starting_capital))
    }

    pub fn with_repository(repo: Arc<dyn TradeRepository>, starting_capital: Decimal) -> Self {
        Self {
            trade_uc: TradeUseCase::new(repo.clone()),
            summary_uc: SummaryUseCase::new(repo, starting_capital),
        }
    }

    pub fn list_trades(&self, owner: &OwnerId, status: Option<TradeStatus>) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list(owner, status)
    }

    pub fn create_trade(&self, owner: &OwnerId, item_name: String, buy_price: Decimal) -> Result<Trade, DomainError> {
        self.trade_uc.create(owner, item_name, buy_price)
    }

    pub fn get_trade(&self, owner: &OwnerId, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.get(owner, id)
    }

    pub fn update_trade(&self, owner: &OwnerId, id: &str, patch: TradePatch) -> Result<Trade, DomainError> {
        self.trade_uc.update(owner, id, patch)
    }

    pub fn delete_trade(&self, owner: &OwnerId, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(owner, id)
    }

    pub fn summary(&self, owner: &OwnerId) -> Result<TradeSummary, DomainError> {
        self.summary_uc.execute(owner)
    }

    pub fn dashboard(&self, owner: &OwnerId) -> Result<Dashboard, DomainError> {
        self.summary_uc.dashboard(owner)
    }

    pub fn health(&self) -> Result<(), DomainError> {
        self.trade_uc.health()
    }
}
