use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trades (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            item_name TEXT NOT NULL,
            buy_price TEXT NOT NULL,
            buy_date TEXT NOT NULL,
            sell_price TEXT,
            sell_date TEXT,
            site_commission TEXT,
            status TEXT NOT NULL DEFAULT 'UNSOLD'
        );

        CREATE INDEX IF NOT EXISTS idx_trades_owner_buy_date ON trades(owner_id, buy_date);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
