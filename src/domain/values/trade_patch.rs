use crate::domain::error::DomainError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Partial update of a trade.
///
/// Only these four fields are client-writable. Unknown keys (including `id`,
/// `ownerId`, `status` and `sellDate`) fail deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TradePatch {
    pub item_name: Option<String>,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub site_commission: Option<Decimal>,
}

impl TradePatch {
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes)
            .map_err(|e| DomainError::Validation(format!("Invalid trade patch: {e}")))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.item_name {
            validate_item_name(name)?;
        }
        if let Some(price) = self.buy_price {
            validate_amount("buyPrice", price)?;
        }
        if let Some(price) = self.sell_price {
            validate_amount("sellPrice", price)?;
        }
        if let Some(commission) = self.site_commission {
            validate_amount("siteCommission", commission)?;
        }
        Ok(())
    }
}

pub fn validate_item_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("itemName must not be empty".into()));
    }
    Ok(())
}

/// Largest accepted monetary amount. Summaries add amounts across every
/// trade, so this keeps those sums far below `Decimal::MAX`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

pub fn validate_amount(field: &str, amount: Decimal) -> Result<(), DomainError> {
    if amount < Decimal::ZERO {
        return Err(DomainError::Validation(format!(
            "{field} must not be negative (got {amount})"
        )));
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(DomainError::Validation(format!(
            "{field} must not exceed {MAX_AMOUNT} (got {amount})"
        )));
    }
    Ok(())
}
