//! Dashboard statistics over one owner's trades.
//!
//! Pure aggregation: the caller hands in a snapshot and a starting capital
//! figure, nothing here touches storage. All sums are `Decimal` so two-decimal
//! currency values add up exactly.

use crate::domain::entities::trade::Trade;
use crate::domain::values::trade_status::TradeStatus;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub unsold_item_count: usize,
    /// Capital tied up in open positions.
    pub unsold_buy_total: Decimal,
    pub all_sales_count: usize,
    /// Commission across every trade, sold or not.
    pub commission_total: Decimal,
    /// Σ (sell − buy − commission) over sold trades.
    pub total_profit: Decimal,
    /// Net proceeds received: Σ sell − Σ commission over sold trades.
    pub cash_total: Decimal,
    /// `starting_capital + cash_total − unsold_buy_total`.
    pub cash_on_hand: Decimal,
    pub starting_capital: Decimal,
}

impl TradeSummary {
    pub fn from_trades(trades: &[Trade], starting_capital: Decimal) -> Self {
        let mut unsold_item_count = 0;
        let mut unsold_buy_total = Decimal::ZERO;
        let mut all_sales_count = 0;
        let mut commission_total = Decimal::ZERO;
        let mut total_profit = Decimal::ZERO;
        let mut cash_total = Decimal::ZERO;

        for trade in trades {
            commission_total += trade.commission();

            match trade.status {
                TradeStatus::Unsold => {
                    unsold_item_count += 1;
                    unsold_buy_total += trade.buy_price;
                }
                TradeStatus::Sold => {
                    all_sales_count += 1;
                    if let Some(net) = trade.net_proceeds() {
                        cash_total += net;
                        total_profit += net - trade.buy_price;
                    }
                }
            }
        }

        Self {
            unsold_item_count,
            unsold_buy_total,
            all_sales_count,
            commission_total,
            total_profit,
            cash_total,
            cash_on_hand: starting_capital + cash_total - unsold_buy_total,
            starting_capital,
        }
    }
}
