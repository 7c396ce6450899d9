//! The schema for transaction categories.
//!
//! No endpoint reads or writes categories yet; the table exists so that the
//! database layout matches what category management will need.

use rusqlite::Connection;

/// Create the categories table in the database.
///
/// A category's `type` is restricted to `'income'` or `'expense'`, the same
/// as a transaction's.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            type TEXT CHECK(type IN ('income', 'expense'))
        )",
        (),
    )?;

    Ok(())
}
