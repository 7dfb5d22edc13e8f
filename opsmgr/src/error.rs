//! Error types for the management-server client.

use std::fmt;

/// Failures surfaced by the client, one variant per failure class.
#[derive(Debug)]
pub enum ClientError {
    /// The server address could not be turned into a base URL
    InvalidServerAddress { address: String, reason: String },

    /// The underlying HTTP client could not be constructed
    ClientBuild { reason: String },

    /// The server was unreachable or the transport failed mid-request
    ConnectionFailed { host: String, reason: String },

    /// The server rejected the credential or session token
    AuthenticationFailed { host: String },

    /// The server answered with something the client could not parse
    InvalidResponse { host: String, reason: String },

    /// The server reported a failure of its own
    ServerError { host: String, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidServerAddress { address, reason } => {
                write!(f, "Invalid server address '{}': {}", address, reason)
            }
            ClientError::ClientBuild { reason } => {
                write!(f, "Failed to build HTTP client: {}", reason)
            }
            ClientError::ConnectionFailed { host, reason } => {
                write!(f, "Connection to {} failed: {}", host, reason)
            }
            ClientError::AuthenticationFailed { host } => {
                write!(f, "Authentication failed for {}", host)
            }
            ClientError::InvalidResponse { host, reason } => {
                write!(f, "Invalid response from {}: {}", host, reason)
            }
            ClientError::ServerError { host, message } => {
                write!(f, "Server error from {}: {}", host, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}
