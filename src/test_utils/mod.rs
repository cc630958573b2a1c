#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_json_content_type, assert_plain_text_error};

use axum_test::TestServer;

use crate::{AppState, build_router, transaction::TransactionStore};

/// Serve the full router over `store`.
pub(crate) fn must_create_test_server(store: TransactionStore) -> TestServer {
    let app = build_router(AppState::new(store));

    TestServer::try_new(app).expect("Could not create test server.")
}

/// Serve the full router over a store holding the seed data.
///
/// The store is returned so tests can check its state directly.
pub(crate) fn must_create_seeded_test_server() -> (TestServer, TransactionStore) {
    let store = TransactionStore::with_seed_data();
    let server = must_create_test_server(store.clone());

    (server, store)
}
