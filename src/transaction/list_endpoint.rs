use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::lock_connection,
    transaction::core::{TransactionState, TransactionsResponse, get_all_transactions},
};

/// A route handler for listing every transaction.
///
/// There is no filtering or pagination and the order is whatever SQLite returns.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<TransactionsResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let transactions = get_all_transactions(&connection)?;

    Ok(Json(TransactionsResponse { transactions }))
}
