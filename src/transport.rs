//! TCP connection to the game server
//!
//! Resolves the server's name to IPv4 stream addresses and connects to the
//! first one that accepts.

use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

/// Errors establishing the connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Name resolution failed
    #[error("could not resolve {host}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    /// Resolution returned no IPv4 address
    #[error("could not resolve host {0}")]
    NoAddress(String),

    /// Every resolved address refused the connection
    #[error("connection to {addr} failed")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Resolve `host:port` to its IPv4 addresses
///
/// # Errors
/// Returns `ConnectError::Resolve` if the lookup fails, or
/// `ConnectError::NoAddress` if it yields no IPv4 address.
pub fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, ConnectError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| ConnectError::Resolve {
            host: host.to_string(),
            source,
        })?
        .filter(SocketAddr::is_ipv4)
        .collect();

    if addrs.is_empty() {
        return Err(ConnectError::NoAddress(host.to_string()));
    }
    Ok(addrs)
}

/// Connect to the game server
///
/// Addresses are tried in resolution order; the error of the last attempt
/// is returned if none accepts.
///
/// # Errors
/// Returns `ConnectError` if resolution or every connection attempt fails.
pub fn connect(host: &str, port: u16) -> Result<TcpStream, ConnectError> {
    let mut last_error = None;

    for addr in resolve(host, port)? {
        tracing::debug!(%addr, "connecting");
        match TcpStream::connect(addr) {
            Ok(stream) => {
                tracing::info!(%addr, "connected");
                return Ok(stream);
            }
            Err(source) => {
                tracing::debug!(%addr, error = %source, "connection attempt failed");
                last_error = Some(ConnectError::Connect { addr, source });
            }
        }
    }

    Err(last_error.unwrap_or_else(|| ConnectError::NoAddress(host.to_string())))
}
