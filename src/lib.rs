//! Pet Project API is a small web service for recording financial transactions.
//!
//! This library provides a JSON REST API over an in-memory collection of
//! [transactions](Transaction). Nothing is persisted: the collection starts
//! with two seed records and is discarded when the process exits.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
pub mod endpoints;
mod envelope;
mod logging;
mod routing;
mod service;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use config::{DEFAULT_PORT, PORT_ENV_VAR, parse_port, resolve_port};
pub use envelope::Envelope;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use service::{SERVICE_NAME, SERVICE_VERSION};
pub use transaction::{Transaction, TransactionPayload, TransactionStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the Ctrl+C signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be decoded as a transaction.
    ///
    /// The decoding error is kept for logging, clients only see a generic
    /// message.
    #[error("could not decode the request body as a transaction: {0}")]
    InvalidJson(String),

    /// The request path ended with `/transactions/` and no ID.
    #[error("the transaction ID is missing from the request path")]
    MissingTransactionId,

    /// No transaction has the requested ID.
    #[error("the transaction \"{0}\" could not be found")]
    TransactionNotFound(String),

    /// The route exists but does not accept the request method.
    #[error("the request method is not allowed for this route")]
    MethodNotAllowed,

    /// The lock guarding the transaction collection was poisoned by a
    /// panicking thread.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// The port setting is not a valid port number.
    #[error("invalid port \"{0}\": expected an integer between 0 and 65535")]
    InvalidPort(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidJson(ref reason) => {
                tracing::debug!("Rejected request body: {reason}");
                (StatusCode::BAD_REQUEST, "Invalid JSON")
            }
            Error::MissingTransactionId => (StatusCode::BAD_REQUEST, "Transaction ID required"),
            Error::TransactionNotFound(_) => (StatusCode::NOT_FOUND, "Transaction not found"),
            Error::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn client_errors_map_to_status_codes() {
        let cases = [
            (Error::InvalidJson("eof".to_owned()), StatusCode::BAD_REQUEST),
            (Error::MissingTransactionId, StatusCode::BAD_REQUEST),
            (
                Error::TransactionNotFound("txn-404".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (Error::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
        ];

        for (error, want_status) in cases {
            let response = error.into_response();

            assert_eq!(response.status(), want_status);
        }
    }

    #[test]
    fn lock_error_is_internal_server_error() {
        let response = Error::StoreLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
