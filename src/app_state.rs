//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::transaction::TransactionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for the transactions served by the API.
    pub transaction_store: TransactionStore,
}

impl AppState {
    /// Create a new [AppState] serving the transactions in `transaction_store`.
    pub fn new(transaction_store: TransactionStore) -> Self {
        Self { transaction_store }
    }
}

// this impl lets the transaction handlers extract only the store from our state
impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_store.clone()
    }
}
