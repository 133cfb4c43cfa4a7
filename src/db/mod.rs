pub mod queries;
pub mod schema;

use anyhow::Context;
use rusqlite::Connection;

/// Handle to the booking database. Holds only the location; every caller gets
/// its own connection from [`Database::connect`], closed when it is dropped.
#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn connect(&self) -> rusqlite::Result<Connection> {
        open(&self.path)
    }
}

pub fn init_db(path: &str) -> anyhow::Result<Database> {
    let conn = open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .context("failed to set database pragmas")?;

    schema::create_tables(&conn)?;

    Ok(Database {
        path: path.to_string(),
    })
}

fn open(path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(conn)
}
