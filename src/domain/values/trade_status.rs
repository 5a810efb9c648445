use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Unsold,
    Sold,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeStatus::Unsold => write!(f, "UNSOLD"),
            TradeStatus::Sold => write!(f, "SOLD"),
        }
    }
}

impl FromStr for TradeStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsold" => Ok(TradeStatus::Unsold),
            "sold" => Ok(TradeStatus::Sold),
            _ => Err(format!("Unknown trade status: {s}")),
        }
    }
}
