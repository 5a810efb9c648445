use crate::domain::error::DomainError;
use crate::domain::values::trade_patch::MAX_AMOUNT;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DEFAULT_DB_PATH: &str = "./tradebook.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STARTING_CAPITAL: i64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub bind_addr: String,
    pub jwt_secret: Option<String>,
    /// Cash the user started with; `cash_on_hand` builds on it.
    pub starting_capital: Decimal,
}

impl Config {
    /// Reads `TRADEBOOK_*` variables. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let starting_capital = match lookup("TRADEBOOK_STARTING_CAPITAL") {
            Some(raw) => parse_capital(&raw)?,
            None => Decimal::from(DEFAULT_STARTING_CAPITAL),
        };

        Ok(Self {
            db_path: lookup("TRADEBOOK_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            bind_addr: lookup("TRADEBOOK_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            jwt_secret: lookup("TRADEBOOK_JWT_SECRET").filter(|s| !s.is_empty()),
            starting_capital,
        })
    }

    pub fn require_jwt_secret(&self) -> Result<&str, DomainError> {
        self.jwt_secret
            .as_deref()
            .ok_or_else(|| DomainError::Config("TRADEBOOK_JWT_SECRET is not set".into()))
    }
}

fn parse_capital(raw: &str) -> Result<Decimal, DomainError> {
    let capital = Decimal::from_str(raw.trim()).map_err(|e| {
        DomainError::Config(format!("Invalid TRADEBOOK_STARTING_CAPITAL '{raw}': {e}"))
    })?;
    if capital < Decimal::ZERO {
        return Err(DomainError::Config(
            "TRADEBOOK_STARTING_CAPITAL must not be negative".into(),
        ));
    }
    if capital > Decimal::from(MAX_AMOUNT) {
        return Err(DomainError::Config(format!(
            "TRADEBOOK_STARTING_CAPITAL must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(capital)
}
