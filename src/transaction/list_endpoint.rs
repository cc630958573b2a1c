use axum::extract::State;

use crate::{
    Envelope, Error,
    transaction::{Transaction, TransactionStore},
};

/// A route handler for listing every transaction in storage order.
pub async fn get_transactions_endpoint(
    State(store): State<TransactionStore>,
) -> Result<Envelope<Vec<Transaction>>, Error> {
    let transactions = store.get_all()?;

    Ok(Envelope::with_data(
        "Transactions retrieved successfully",
        transactions,
    ))
}
