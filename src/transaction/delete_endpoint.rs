use axum::extract::{Path, State};

use crate::{Envelope, Error, transaction::TransactionStore};

/// A route handler for deleting a transaction, responds with a confirmation
/// message and no data.
pub async fn delete_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<String>,
) -> Result<Envelope<()>, Error> {
    let deleted = store.delete(&transaction_id)?;

    tracing::info!("Deleted transaction {}", deleted.id);

    Ok(Envelope::message_only("Transaction deleted successfully"))
}
