//! Transaction management for the cashbook service.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionInput` request body
//! - Database functions for storing, querying, and managing transactions
//! - JSON route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{Transaction, TransactionInput, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub(crate) use core::{
    CreatedTransaction, MessageResponse, TransactionResponse, TransactionState,
    TransactionsResponse, create_transaction, get_transaction, must_create_test_connection,
};
