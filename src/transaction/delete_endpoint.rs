use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    transaction::core::{
        MessageResponse, TransactionState, delete_transaction, parse_transaction_id,
    },
};

/// A route handler for deleting a transaction.
///
/// Responds with 404 if no row was deleted.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;

    let connection = lock_connection(&state.db_connection)?;

    match delete_transaction(transaction_id, &connection)? {
        0 => {
            tracing::debug!(
                "Could not delete transaction {transaction_id}: delete returned zero rows affected"
            );
            Err(Error::NotFound)
        }
        _ => Ok(Json(MessageResponse::new("Transaction deleted"))),
    }
}
