//! Resolves the port the server listens on.

use crate::Error;

/// The environment variable that selects the port.
pub const PORT_ENV_VAR: &str = "PORT";
/// The port used when neither the command line nor [PORT_ENV_VAR] set one.
pub const DEFAULT_PORT: u16 = 8080;

/// Parse a port setting, falling back to [DEFAULT_PORT] when it is unset or empty.
///
/// # Errors
///
/// Returns [Error::InvalidPort] if `value` is not an integer in the range 0-65535.
pub fn parse_port(value: Option<&str>) -> Result<u16, Error> {
    match value {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(port) => port
            .parse()
            .map_err(|_| Error::InvalidPort(port.to_owned())),
    }
}

/// Pick the port to listen on: `cli_port` if given, otherwise `env_port` (the
/// value of [PORT_ENV_VAR]), otherwise [DEFAULT_PORT].
///
/// # Errors
///
/// Returns [Error::InvalidPort] if `env_port` is used and is not a valid port.
pub fn resolve_port(cli_port: Option<u16>, env_port: Option<&str>) -> Result<u16, Error> {
    match cli_port {
        Some(port) => Ok(port),
        None => parse_port(env_port),
    }
}
