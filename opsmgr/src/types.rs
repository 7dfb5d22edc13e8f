//! Shared types for the management-server client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque secret value.
///
/// `Debug` and `Display` never reveal the contents; the raw value is only
/// reachable through [`Secret::expose`] at the point where it goes on the
/// wire.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value. Pass it straight into a request body, nowhere else.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(********)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

/// Account name plus secret, built once per run and never persisted.
#[derive(Debug, Clone)]
pub struct Credential {
    pub account: String,
    pub secret: Secret,
}

impl Credential {
    pub fn new(account: impl Into<String>, secret: Secret) -> Self {
        Self {
            account: account.into(),
            secret,
        }
    }
}

/// A managed host as the server represents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoredObject {
    pub id: String,
    pub display_name: String,
    pub class_id: String,
    #[serde(default)]
    pub in_maintenance: bool,
}

/// Reason code recorded on a maintenance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceReason {
    PlannedOther,
    PlannedHardwareMaintenance,
    PlannedOsReconfiguration,
    UnplannedOther,
}

/// Outcome of resolving a display name against the enumerated computers.
///
/// Zero and multiple matches are explicit outcomes so callers decide what
/// to do with them instead of inheriting first-match semantics.
#[derive(Debug, Clone)]
pub enum Lookup {
    Found(MonitoredObject),
    NotFound,
    Ambiguous(Vec<MonitoredObject>),
}
