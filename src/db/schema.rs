use anyhow::Context;
use rusqlite::Connection;

const CREATE_BOOKINGS: &str = "CREATE TABLE IF NOT EXISTS bookings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    datetime TEXT NOT NULL,
    service TEXT NOT NULL,
    location TEXT,
    notes TEXT,
    status TEXT DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";

pub fn create_tables(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(CREATE_BOOKINGS)
        .context("failed to create bookings table")?;

    tracing::debug!("bookings table ready");
    Ok(())
}
