//! Secret resolution for the management-server account.
//!
//! The secret comes either directly from the command line / environment or
//! from a TOML file with an [accounts] table keyed by account name:
//!
//! ```toml
//! [accounts]
//! "CORP\\svc-maint" = "the-secret"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use opsmgr::Secret;

#[derive(Debug, Deserialize, Default)]
struct SecretsFile {
    #[serde(default)]
    accounts: HashMap<String, String>,
}

/// Pick the secret for `account`. A direct value wins; otherwise the
/// secrets file must contain an entry for the account.
pub fn resolve(direct: Option<&str>, file: Option<&Path>, account: &str) -> Result<Secret> {
    if let Some(value) = direct {
        return Ok(Secret::new(value));
    }

    let path = match file {
        Some(path) => path,
        None => bail!("no secret provided: pass --secret or --secret-file"),
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read secrets file: {}", path.display()))?;

    let secrets: SecretsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse secrets file: {}", path.display()))?;

    debug!(
        "Loaded secrets for {} accounts from {}",
        secrets.accounts.len(),
        path.display()
    );

    match secrets.accounts.get(account) {
        Some(value) => Ok(Secret::new(value.as_str())),
        None => bail!(
            "secrets file {} has no entry for account '{}'",
            path.display(),
            account
        ),
    }
}
