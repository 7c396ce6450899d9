//! Defines the core data models and database queries for transactions.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, Path, rejection::PathRejection};
use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Either `"income"` or `"expense"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// A free text label for what the transaction was for, e.g. "Groceries".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened, stored as the client sent it.
    pub date: String,
    /// An optional text description of the transaction.
    pub description: Option<String>,
}

/// The request body for creating or updating a transaction.
///
/// Updates overwrite every field, so the same body is used for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Either `"income"` or `"expense"`.
    ///
    /// Any other value is rejected by the database's CHECK constraint rather
    /// than during deserialization.
    #[serde(rename = "type")]
    pub kind: String,
    /// A free text label for what the transaction was for.
    pub category: String,
    /// The amount of money. The sign and range are not checked.
    pub amount: f64,
    /// When the transaction happened. The format is not checked.
    pub date: String,
    /// An optional text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionInput {
    /// Create a transaction input without a description.
    pub fn new(kind: &str, category: &str, amount: f64, date: &str) -> Self {
        Self {
            kind: kind.to_owned(),
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// The response body for a newly created transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// The ID assigned to the new transaction.
    pub id: TransactionId,
}

/// The response body for a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The requested transaction.
    pub transaction: Transaction,
}

/// The response body for listing transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction in the database.
    pub transactions: Vec<Transaction>,
}

/// The response body for a successful update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// What happened.
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Resolve the transaction ID from the request path.
///
/// An ID that is not an integer cannot match any row, so it is reported as
/// [Error::NotFound].
pub(crate) fn parse_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    match path {
        Ok(Path(transaction_id)) => Ok(transaction_id),
        Err(rejection) => {
            tracing::debug!("Invalid transaction ID in path: {}", rejection.body_text());
            Err(Error::NotFound)
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The number of rows changed by an `UPDATE` or `DELETE` statement.
pub type RowsAffected = usize;

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT CHECK(type IN ('income', 'expense')),
            category TEXT,
            amount REAL,
            date TEXT,
            description TEXT
        )",
        (),
    )?;

    Ok(())
}

/// Create a new transaction in the database and return its ID.
///
/// IDs are never reused, even after the transaction with the highest ID has
/// been deleted.
///
/// # Errors
/// This function will return a [Error::SqlError] if `input.kind` is not
/// `"income"` or `"expense"`, or if there is some other SQL error.
pub fn create_transaction(
    input: &TransactionInput,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    connection
        .prepare(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id",
        )?
        .query_row(
            params![
                input.kind,
                input.category,
                input.amount,
                input.date,
                input.description,
            ],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description
             FROM transactions
             WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(Error::from)
}

/// Retrieve every transaction in the database, in the order SQLite returns them.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the transaction with the given `id`.
///
/// Returns the number of rows affected; zero means no transaction has that `id`.
///
/// # Errors
/// This function will return a [Error::SqlError] if `input.kind` is not
/// `"income"` or `"expense"`, or if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    input: &TransactionInput,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE transactions
            SET \
                type = ?1, \
                category = ?2, \
                amount = ?3, \
                date = ?4, \
                description = ?5 \
            WHERE id = ?6",
            params![
                input.kind,
                input.category,
                input.amount,
                input.date,
                input.description,
                id,
            ],
        )
        .map_err(Error::from)
}

/// Delete the transaction with the given `id`.
///
/// Returns the number of rows affected; zero means no transaction has that `id`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        kind: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}

#[cfg(test)]
pub(crate) fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    crate::initialize_db(&connection).expect("could not initialize test DB");

    connection
}
