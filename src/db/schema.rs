use rusqlite::Connection;

use crate::error::GiftedResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> GiftedResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS participants (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            managed_by TEXT REFERENCES participants(id) ON DELETE SET NULL,
            registered_on TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            starts_on TEXT NOT NULL,
            ends_on TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS event_participants (
            event_id TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            participant_id TEXT NOT NULL REFERENCES participants(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            PRIMARY KEY (event_id, participant_id)
        );

        CREATE TABLE IF NOT EXISTS pairs (
            event_id TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            gifter_id TEXT NOT NULL REFERENCES participants(id) ON DELETE CASCADE,
            giftee_id TEXT NOT NULL REFERENCES participants(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (event_id, gifter_id),
            CHECK (gifter_id != giftee_id)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
