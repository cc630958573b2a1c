use axum::{
    body::Bytes,
    extract::{Path, State},
};

use crate::{
    Envelope, Error,
    transaction::{Transaction, TransactionPayload, TransactionStore},
};

/// A route handler for replacing a transaction, responds with the stored
/// transaction.
///
/// The transaction keeps the ID from the path, any ID in the body is ignored.
/// The body is checked before the store so an invalid body is a 400 response
/// even when the transaction does not exist.
pub async fn edit_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<String>,
    body: Bytes,
) -> Result<Envelope<Transaction>, Error> {
    let payload = TransactionPayload::from_json(&body)?;
    let transaction = store.replace(payload.into_replacement(&transaction_id))?;

    tracing::info!("Updated transaction {}", transaction.id);

    Ok(Envelope::with_data(
        "Transaction updated successfully",
        transaction,
    ))
}
