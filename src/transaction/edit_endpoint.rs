use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    transaction::core::{
        MessageResponse, TransactionInput, TransactionState, parse_transaction_id,
        update_transaction,
    },
};

/// A route handler for overwriting every field of an existing transaction.
///
/// Whether the transaction exists is decided by the number of rows the update
/// changed, so a missing transaction responds with 404 and nothing is written.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<TransactionInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;
    let Json(input) = body.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    let connection = lock_connection(&state.db_connection)?;

    match update_transaction(transaction_id, &input, &connection)? {
        0 => {
            tracing::debug!(
                "Could not update transaction {transaction_id}: update returned zero rows affected"
            );
            Err(Error::NotFound)
        }
        _ => Ok(Json(MessageResponse::new("Transaction updated"))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
    };

    use crate::{
        Error,
        transaction::{
            Transaction, TransactionInput, TransactionState, create_transaction,
            edit_endpoint::edit_transaction_endpoint, get_transaction,
            must_create_test_connection,
        },
    };

    #[tokio::test]
    async fn can_update_transaction() {
        let connection = must_create_test_connection();
        let id = create_transaction(
            &TransactionInput::new("income", "Salary", 1.23, "2025-10-27").description("test"),
            &connection,
        )
        .unwrap();
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        };
        let want_transaction = Transaction {
            id,
            kind: "expense".to_owned(),
            category: "Food".to_owned(),
            amount: 3.21,
            date: "2025-10-28".to_owned(),
            description: Some("foo".to_owned()),
        };
        let input =
            TransactionInput::new("expense", "Food", 3.21, "2025-10-28").description("foo");

        let Json(response) =
            edit_transaction_endpoint(State(state.clone()), Ok(Path(id)), Ok(Json(input)))
                .await
                .unwrap();

        assert_eq!(response.message, "Transaction updated");
        let got_transaction =
            get_transaction(id, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(want_transaction, got_transaction);
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(must_create_test_connection())),
        };
        let input = TransactionInput::new("expense", "Food", 3.21, "2025-10-28");

        let result = edit_transaction_endpoint(State(state), Ok(Path(9)), Ok(Json(input))).await;

        assert!(matches!(result, Err(Error::NotFound)));
    }
}
