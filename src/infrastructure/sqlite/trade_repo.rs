use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use crate::domain::values::owner_id::OwnerId;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Mutex;

const TRADE_COLUMNS: &str =
    "id, owner_id, item_name, buy_price, buy_date, sell_price, sell_date, site_commission, status";

pub struct SqliteTradeRepo {
    conn: Mutex<Connection>,
}

impl SqliteTradeRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_trade(row: &rusqlite::Row) -> Result<Trade, rusqlite::Error> {
        let owner: String = row.get(1)?;
        let buy_price: String = row.get(3)?;
        let buy_date: String = row.get(4)?;
        let sell_price: Option<String> = row.get(5)?;
        let sell_date: Option<String> = row.get(6)?;
        let commission: Option<String> = row.get(7)?;
        let status: String = row.get(8)?;

        Ok(Trade {
            id: row.get(0)?,
            owner_id: OwnerId::new(owner).map_err(|e| conversion_error(1, e.into()))?,
            item_name: row.get(2)?,
            buy_price: parse_decimal(3, &buy_price)?,
            buy_date: parse_timestamp(4, &buy_date)?,
            sell_price: sell_price.map(|s| parse_decimal(5, &s)).transpose()?,
            sell_date: sell_date.map(|s| parse_timestamp(6, &s)).transpose()?,
            site_commission: commission.map(|s| parse_decimal(7, &s)).transpose()?,
            status: TradeStatus::from_str(&status).map_err(|e| conversion_error(8, e.into()))?,
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Fixed-width UTC timestamps so text ordering matches time ordering.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(idx: usize, s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, Box::new(e)))
}

fn parse_decimal(idx: usize, s: &str) -> Result<Decimal, rusqlite::Error> {
    Decimal::from_str(s).map_err(|e| conversion_error(idx, Box::new(e)))
}

fn conversion_error(
    idx: usize,
    err: Box<dyn std::error::Error + Send + Sync + 'static>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err)
}

impl TradeRepository for SqliteTradeRepo {
    fn insert_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO trades (id, owner_id, item_name, buy_price, buy_date, sell_price, sell_date, site_commission, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                trade.id,
                trade.owner_id.as_str(),
                trade.item_name,
                trade.buy_price.to_string(),
                format_timestamp(&trade.buy_date),
                trade.sell_price.map(|p| p.to_string()),
                trade.sell_date.as_ref().map(format_timestamp),
                trade.site_commission.map(|c| c.to_string()),
                trade.status.to_string(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        Ok(())
    }

    fn find_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        let conn = self.lock()?;
        let mut sql = format!("SELECT {TRADE_COLUMNS} FROM trades WHERE owner_id = ?1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> =
            vec![Box::new(filter.owner_id.as_str().to_string())];

        if let Some(status) = filter.status {
            sql.push_str(&format!(" AND status = ?{}", param_values.len() + 1));
            param_values.push(Box::new(status.to_string()));
        }
        sql.push_str(" ORDER BY buy_date DESC, rowid DESC");

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let trades = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(format!("Corrupt trade row: {e}")))?;
        Ok(trades)
    }

    fn get_trade(&self, owner_id: &OwnerId, id: &str) -> Result<Option<Trade>, DomainError> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1 AND owner_id = ?2"),
            params![id, owner_id.as_str()],
            Self::row_to_trade,
        )
        .optional()
        .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn modify_trade(
        &self,
        owner_id: &OwnerId,
        id: &str,
        apply: &mut dyn FnMut(&mut Trade) -> Result<(), DomainError>,
    ) -> Result<Trade, DomainError> {
        let mut conn = self.lock()?;
        // IMMEDIATE takes the write lock up front, so another process sharing
        // the file cannot commit between our read and write either.
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut trade = tx
            .query_row(
                &format!("SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1 AND owner_id = ?2"),
                params![id, owner_id.as_str()],
                Self::row_to_trade,
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))?;

        apply(&mut trade)?;

        tx.execute(
            "UPDATE trades SET item_name = ?1, buy_price = ?2, sell_price = ?3, sell_date = ?4, site_commission = ?5, status = ?6
             WHERE id = ?7 AND owner_id = ?8",
            params![
                trade.item_name,
                trade.buy_price.to_string(),
                trade.sell_price.map(|p| p.to_string()),
                trade.sell_date.as_ref().map(format_timestamp),
                trade.site_commission.map(|c| c.to_string()),
                trade.status.to_string(),
                id,
                owner_id.as_str(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        Ok(trade)
    }

    fn delete_trade(&self, owner_id: &OwnerId, id: &str) -> Result<(), DomainError> {
        let conn = self.lock()?;
        let rows = conn
            .execute(
                "DELETE FROM trades WHERE id = ?1 AND owner_id = ?2",
                params![id, owner_id.as_str()],
            )
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }

    fn ping(&self) -> Result<(), DomainError> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| DomainError::Database(format!("Database unreachable: {e}")))?;
        Ok(())
    }
}
