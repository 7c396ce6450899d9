//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    app_state::lock_connection,
    transaction::core::{CreatedTransaction, TransactionInput, TransactionState, create_transaction},
};

/// A route handler for creating a new transaction, responds with the new ID.
///
/// A body that cannot be parsed responds with 400, a transaction type other
/// than income or expense responds with 500 and the database's message.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTransaction>), Error> {
    let Json(input) = body.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    let connection = lock_connection(&state.db_connection)?;
    let id = create_transaction(&input, &connection)?;
    tracing::debug!("Created transaction {id}");

    Ok((StatusCode::CREATED, Json(CreatedTransaction { id })))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};

    use crate::{
        Error,
        transaction::{
            TransactionInput, TransactionState, create_endpoint::create_transaction_endpoint,
            get_transaction, must_create_test_connection,
        },
    };

    fn must_create_test_state() -> TransactionState {
        TransactionState {
            db_connection: Arc::new(Mutex::new(must_create_test_connection())),
        }
    }

    #[tokio::test]
    async fn creates_transaction() {
        let state = must_create_test_state();
        let input = TransactionInput::new("income", "Salary", 100.0, "2024-05-01")
            .description("May pay");

        let (status, Json(created)) =
            create_transaction_endpoint(State(state.clone()), Ok(Json(input.clone())))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let connection = state.db_connection.lock().unwrap();
        let got = get_transaction(created.id, &connection).unwrap();
        assert_eq!(got.kind, input.kind);
        assert_eq!(got.category, input.category);
        assert_eq!(got.amount, input.amount);
        assert_eq!(got.date, input.date);
        assert_eq!(got.description, input.description);
    }

    #[tokio::test]
    async fn invalid_type_is_sql_error() {
        let state = must_create_test_state();
        let input = TransactionInput::new("gift", "Birthday", 20.0, "2024-05-01");

        let result = create_transaction_endpoint(State(state), Ok(Json(input))).await;

        assert!(matches!(result, Err(Error::SqlError(_))));
    }
}
