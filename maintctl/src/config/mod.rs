//! Run and log configuration, resolved once at startup and passed around
//! explicitly.

pub mod secrets;

use anyhow::Result;
use std::path::PathBuf;

use opsmgr::Credential;

use crate::cli::{Cli, Command};

/// What a run does once a session is open.
#[derive(Debug, Clone)]
pub enum Action {
    Enable {
        duration_minutes: u32,
        comment: String,
    },
    Disable,
}

/// Everything one run needs.
#[derive(Debug)]
pub struct RunConfig {
    pub server: String,
    pub credential: Credential,
    /// Overrides local host name discovery when set
    pub fqdn: Option<String>,
    pub action: Action,
}

impl RunConfig {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let (connection, action) = match &cli.command {
            Command::Enable {
                connection,
                duration,
                comment,
            } => (
                connection,
                Action::Enable {
                    duration_minutes: *duration,
                    comment: comment.clone(),
                },
            ),
            Command::Disable { connection } => (connection, Action::Disable),
        };

        let secret = secrets::resolve(
            connection.secret.as_deref(),
            connection.secret_file.as_deref(),
            &connection.account,
        )?;

        Ok(Self {
            server: connection.server.clone(),
            credential: Credential::new(connection.account.clone(), secret),
            fqdn: cli.fqdn.clone(),
            action,
        })
    }
}

/// Log destination settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub root: PathBuf,
    pub subdir: String,
    /// "Enable" or "Disable"; drives the log file name
    pub variant: &'static str,
}

impl LogConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let variant = match &cli.command {
            Command::Enable { .. } => "Enable",
            Command::Disable { .. } => "Disable",
        };

        Self {
            root: cli.log_root.clone(),
            subdir: cli.log_subdir.clone(),
            variant,
        }
    }

    pub fn directory(&self) -> PathBuf {
        self.root.join(&self.subdir)
    }
}
