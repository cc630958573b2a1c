use axum::extract::{Path, State};

use crate::{
    Envelope, Error,
    transaction::{Transaction, TransactionStore},
};

/// A route handler for getting a transaction by its ID.
///
/// Responds with the status code 404 if no transaction has the ID.
pub async fn get_transaction_endpoint(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<String>,
) -> Result<Envelope<Transaction>, Error> {
    let transaction = store.get(&transaction_id)?;

    Ok(Envelope::with_data("Transaction found", transaction))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        Envelope,
        endpoints::{self, format_endpoint},
        test_utils::{
            assert_json_content_type, assert_plain_text_error, must_create_seeded_test_server,
        },
        transaction::Transaction,
    };

    #[tokio::test]
    async fn gets_existing_transaction() {
        let (server, store) = must_create_seeded_test_server();

        for id in ["txn-001", "txn-002"] {
            let response = server
                .get(&format_endpoint(endpoints::TRANSACTION, id))
                .await;

            response.assert_status_ok();
            assert_json_content_type(&response);
            let envelope = response.json::<Envelope<Transaction>>();
            assert_eq!(envelope.message, "Transaction found");
            assert_eq!(envelope.data, Some(store.get(id).unwrap()));
        }
    }

    #[tokio::test]
    async fn repeated_gets_return_identical_payloads() {
        let (server, _) = must_create_seeded_test_server();
        let path = format_endpoint(endpoints::TRANSACTION, "txn-001");

        let first = server.get(&path).await.text();
        let second = server.get(&path).await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let (server, _) = must_create_seeded_test_server();

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, "txn-404"))
            .await;

        assert_plain_text_error(&response, StatusCode::NOT_FOUND, "Transaction not found");
    }

    #[tokio::test]
    async fn empty_id_is_bad_request() {
        let (server, _) = must_create_seeded_test_server();

        let response = server.get(endpoints::TRANSACTIONS_MISSING_ID).await;

        assert_plain_text_error(&response, StatusCode::BAD_REQUEST, "Transaction ID required");
    }
}
