use axum::{body::Bytes, extract::State, http::StatusCode};
use time::OffsetDateTime;

use crate::{
    Envelope, Error,
    transaction::{Transaction, TransactionPayload, TransactionStore},
};

/// A route handler for creating a new transaction, responds with the stored
/// transaction.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    body: Bytes,
) -> Result<(StatusCode, Envelope<Transaction>), Error> {
    let payload = TransactionPayload::from_json(&body)?;
    let transaction = store.insert(payload.into_new_transaction(OffsetDateTime::now_utc()))?;

    tracing::info!("Created transaction {}", transaction.id);

    Ok((
        StatusCode::CREATED,
        Envelope::with_data("Transaction created successfully", transaction),
    ))
}
