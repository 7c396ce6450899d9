//! Totals of income and expenses across all transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, app_state::lock_connection};

/// The totals of all transactions.
///
/// Each field is `None` (serialized as `null`) when there are no transactions,
/// since SQLite's `SUM` over zero rows is `NULL`. A `None` means "no data",
/// not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: Option<f64>,
    /// The sum of the amounts of all expense transactions.
    pub total_expenses: Option<f64>,
    /// Income minus expenses.
    pub balance: Option<f64>,
}

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Compute total income, total expenses and the balance in a single scan.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    connection
        .query_row(
            "SELECT
                SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END) AS total_income,
                SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END) AS total_expenses,
                SUM(CASE WHEN type = 'income' THEN amount ELSE -amount END) AS balance
            FROM transactions",
            [],
            |row| {
                Ok(Summary {
                    total_income: row.get(0)?,
                    total_expenses: row.get(1)?,
                    balance: row.get(2)?,
                })
            },
        )
        .map_err(Error::from)
}

/// A route handler for the income, expenses and balance totals.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Summary>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_summary(&connection).map(Json)
}
