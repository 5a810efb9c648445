use crate::domain::error::DomainError;
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::trade_patch::{validate_amount, validate_item_name, TradePatch};
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub owner_id: OwnerId,
    pub item_name: String,
    pub buy_price: Decimal,
    pub buy_date: DateTime<Utc>,
    pub sell_price: Option<Decimal>,
    pub sell_date: Option<DateTime<Utc>>,
    pub site_commission: Option<Decimal>,
    pub status: TradeStatus,
}

impl Trade {
    pub fn new(owner_id: OwnerId, item_name: String, buy_price: Decimal) -> Result<Self, DomainError> {
        validate_item_name(&item_name)?;
        validate_amount("buyPrice", buy_price)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            item_name: item_name.trim().to_string(),
            buy_price,
            buy_date: Utc::now(),
            sell_price: None,
            sell_date: None,
            site_commission: None,
            status: TradeStatus::Unsold,
        })
    }

    /// Apply a client patch, moving an unsold trade to `SOLD` when a sell
    /// price arrives.
    ///
    /// The patch is validated up front so a rejected patch leaves the trade
    /// untouched. On an already-sold trade a new sell price only replaces the
    /// price; `sell_date` keeps the original sale time.
    pub fn apply_patch(&mut self, patch: TradePatch, now: DateTime<Utc>) -> Result<(), DomainError> {
        patch.validate()?;

        if let Some(name) = patch.item_name {
            self.item_name = name.trim().to_string();
        }
        if let Some(price) = patch.buy_price {
            self.buy_price = price;
        }
        if let Some(commission) = patch.site_commission {
            self.site_commission = Some(commission);
        }
        if let Some(price) = patch.sell_price {
            self.sell_price = Some(price);
            if self.status == TradeStatus::Unsold {
                self.sell_date = Some(now);
                self.status = TradeStatus::Sold;
            }
        }
        Ok(())
    }

    pub fn is_sold(&self) -> bool {
        self.status == TradeStatus::Sold
    }

    pub fn commission(&self) -> Decimal {
        self.site_commission.unwrap_or(Decimal::ZERO)
    }

    /// Sale price minus venue commission; `None` while unsold.
    pub fn net_proceeds(&self) -> Option<Decimal> {
        match (self.status, self.sell_price) {
            (TradeStatus::Sold, Some(price)) => Some(price - self.commission()),
            _ => None,
        }
    }

    /// Realised profit; `None` while unsold.
    pub fn profit(&self) -> Option<Decimal> {
        self.net_proceeds().map(|net| net - self.buy_price)
    }
}
