use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    transaction::core::{
        TransactionResponse, TransactionState, get_transaction, parse_transaction_id,
    },
};

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested transaction does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<TransactionResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = get_transaction(transaction_id, &connection)?;

    Ok(Json(TransactionResponse { transaction }))
}
