//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{*transaction_id}', use [format_endpoint].

/// The root route which describes the service.
pub const ROOT: &str = "/";
/// The liveness check.
pub const HEALTH: &str = "/health";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The transactions route with a trailing slash and no ID.
pub const TRANSACTIONS_MISSING_ID: &str = "/transactions/";
/// The route to access a single transaction.
///
/// The ID is everything after `/transactions/`, so it may contain slashes.
pub const TRANSACTION: &str = "/transactions/{*transaction_id}";

/// The endpoints advertised by the welcome route.
pub const PUBLIC_ENDPOINTS: [&str; 2] = [HEALTH, TRANSACTIONS];

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by an
/// optional `*` and lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{*transaction_id}',
/// '{*transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
