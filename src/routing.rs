//! Application router configuration.

use axum::{
    Router,
    routing::{any, get},
};

use crate::{
    AppState, Error, endpoints,
    service::{get_health, get_welcome},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, get_transactions_endpoint, missing_transaction_id_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Known paths answer unsupported methods with a plain text 405. Any other path,
/// whatever the method, is answered like the root route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_welcome).fallback(get_405_method_not_allowed),
        )
        .route(
            endpoints::HEALTH,
            get(get_health).fallback(get_405_method_not_allowed),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint)
                .post(create_transaction_endpoint)
                .fallback(get_405_method_not_allowed),
        )
        .route(
            endpoints::TRANSACTIONS_MISSING_ID,
            any(missing_transaction_id_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint)
                .fallback(get_405_method_not_allowed),
        )
        .fallback(get_welcome)
        .with_state(state)
}

async fn get_405_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
