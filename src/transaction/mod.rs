//! Transaction management for the API.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionPayload` request body
//! - The `TransactionStore` that owns the in-memory collection
//! - Route handlers for listing, creating, fetching, replacing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod store;

pub use core::{Transaction, TransactionPayload};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use store::TransactionStore;

#[cfg(test)]
pub use core::ZERO_TIMESTAMP;

/// A route handler for `/transactions/`, which names no transaction.
pub async fn missing_transaction_id_endpoint() -> crate::Error {
    crate::Error::MissingTransactionId
}
