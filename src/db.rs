/*! This module sets up the schema of the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create the application's tables if they do not already exist.
///
/// All tables are created inside a single exclusive SQL transaction so that
/// a partially created schema is never observed. Calling this function on an
/// already initialized database is a no-op.
///
/// # Errors
/// Returns an [Error::SqlError] if any table cannot be created. The server
/// cannot serve requests without its schema, so callers should treat this as
/// fatal.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
