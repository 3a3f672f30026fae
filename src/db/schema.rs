use rusqlite::Connection;

use crate::error::ShopResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> ShopResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS members (
            member_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL DEFAULT '',
            city TEXT,
            street TEXT,
            zipcode TEXT,
            created_by TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            last_modified_by TEXT,
            last_modified_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS orders (
            order_id INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id INTEGER NOT NULL REFERENCES members(member_id),
            order_date TEXT NOT NULL,
            status TEXT NOT NULL,
            created_by TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            last_modified_by TEXT,
            last_modified_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_orders_member ON orders(member_id);
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
