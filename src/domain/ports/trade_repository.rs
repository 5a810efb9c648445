use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::trade_status::TradeStatus;

/// Selection over one owner's trades. There is no way to build a filter
/// without an owner.
#[derive(Debug, Clone)]
pub struct TradeFilter {
    pub owner_id: OwnerId,
    pub status: Option<TradeStatus>,
}

impl TradeFilter {
    pub fn for_owner(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            status: None,
        }
    }

    pub fn with_status(mut self, status: Option<TradeStatus>) -> Self {
        self.status = status;
        self
    }
}

/// Persistence port for trades. Every call is scoped by owner; results are
/// ordered by `buy_date` descending.
pub trait TradeRepository: Send + Sync {
    fn insert_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    fn find_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError>;
    fn get_trade(&self, owner_id: &OwnerId, id: &str) -> Result<Option<Trade>, DomainError>;
    /// Loads the trade, hands it to `apply` and writes the result back, all
    /// inside one transaction so no other write lands between the read and
    /// the write. `NotFound` when no row matches both id and owner; an error
    /// from `apply` aborts without writing.
    fn modify_trade(
        &self,
        owner_id: &OwnerId,
        id: &str,
        apply: &mut dyn FnMut(&mut Trade) -> Result<(), DomainError>,
    ) -> Result<Trade, DomainError>;
    fn delete_trade(&self, owner_id: &OwnerId, id: &str) -> Result<(), DomainError>;
    fn ping(&self) -> Result<(), DomainError>;
}
