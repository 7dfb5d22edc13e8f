//! Error taxonomy for a maintenance run.
//!
//! One variant per run stage; each maps to a distinct process exit code so
//! callers of the binary can tell the failing stage apart.

use std::fmt;

#[derive(Debug)]
pub enum RunError {
    /// Setup failed before any contact with the server
    Init { reason: String },

    /// The session could not be opened
    Connection { server: String, reason: String },

    /// The local host's monitored object could not be determined
    Resolution { fqdn: String, reason: String },

    /// The maintenance toggle itself failed
    Toggle {
        target: String,
        operation: String,
        reason: String,
    },
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Init { .. } => 1,
            RunError::Connection { .. } => 2,
            RunError::Resolution { .. } => 3,
            RunError::Toggle { .. } => 4,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Init { reason } => {
                write!(f, "Initialization failed: {}", reason)
            }
            RunError::Connection { server, reason } => {
                write!(f, "Connection to {} failed: {}", server, reason)
            }
            RunError::Resolution { fqdn, reason } => {
                write!(f, "Target resolution failed ({}): {}", fqdn, reason)
            }
            RunError::Toggle {
                target,
                operation,
                reason,
            } => {
                write!(f, "Failed to {} on '{}': {}", operation, target, reason)
            }
        }
    }
}

impl std::error::Error for RunError {}
