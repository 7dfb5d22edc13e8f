pub mod client;
pub mod constants;
pub mod error;
pub mod session;
pub mod types;

mod wire;

// Re-export commonly used types
pub use client::ManagementClient;
pub use error::ClientError;
pub use session::Session;
pub use types::{Credential, Lookup, MaintenanceReason, MonitoredObject, Secret};
