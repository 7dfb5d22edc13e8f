//! The run sequence: build the client, open a session, resolve the local
//! host's monitored object, toggle maintenance, release the session.
//!
//! Stages are strictly sequential. The session, once open, is released on
//! every path out of the run, success included; a release failure is logged
//! but does not change the run's outcome.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use opsmgr::{Lookup, MaintenanceReason, ManagementClient, Session};

use crate::cli::Cli;
use crate::config::{Action, RunConfig};
use crate::errors::RunError;

/// Resolve configuration from the parsed command line, then run.
pub async fn execute(cli: &Cli) -> Result<(), RunError> {
    let config = RunConfig::resolve(cli).map_err(|e| RunError::Init {
        reason: format!("{:#}", e),
    })?;

    execute_with(config).await
}

/// Run the four stages against an already-resolved configuration.
pub async fn execute_with(config: RunConfig) -> Result<(), RunError> {
    let started_at = Utc::now();

    let client = ManagementClient::new(&config.server).map_err(|e| RunError::Init {
        reason: e.to_string(),
    })?;
    info!("Management client ready for {}", client.base_url());

    let session = client
        .open_session(&config.credential)
        .await
        .map_err(|e| RunError::Connection {
            server: config.server.clone(),
            reason: e.to_string(),
        })?;
    info!(
        "Session opened on {} as {}",
        config.server, config.credential.account
    );

    let outcome = toggle(&session, &config, started_at).await;

    if let Err(e) = session.close().await {
        warn!("Failed to release session on {}: {}", config.server, e);
    } else {
        info!("Session released on {}", config.server);
    }

    outcome
}

async fn toggle(
    session: &Session,
    config: &RunConfig,
    started_at: DateTime<Utc>,
) -> Result<(), RunError> {
    let fqdn = match &config.fqdn {
        Some(fqdn) => fqdn.clone(),
        None => local_fqdn()?,
    };

    let object = match session.find_computer(&fqdn).await {
        Ok(Lookup::Found(object)) => object,
        Ok(Lookup::NotFound) => {
            return Err(RunError::Resolution {
                fqdn,
                reason: "no monitored computer has that display name".to_string(),
            });
        }
        Ok(Lookup::Ambiguous(candidates)) => {
            let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
            return Err(RunError::Resolution {
                fqdn,
                reason: format!(
                    "{} monitored computers share that display name: {}",
                    ids.len(),
                    ids.join(", ")
                ),
            });
        }
        Err(e) => {
            return Err(RunError::Resolution {
                fqdn,
                reason: e.to_string(),
            });
        }
    };
    info!("Resolved {} to monitored object {}", fqdn, object.id);

    match &config.action {
        Action::Enable {
            duration_minutes,
            comment,
        } => {
            let end_time = started_at + Duration::minutes(i64::from(*duration_minutes));
            session
                .start_maintenance(
                    &object,
                    end_time,
                    comment,
                    MaintenanceReason::PlannedOsReconfiguration,
                )
                .await
                .map_err(|e| RunError::Toggle {
                    target: object.display_name.clone(),
                    operation: "start maintenance".to_string(),
                    reason: e.to_string(),
                })?;
            info!(
                "Maintenance started for {} until {} ({})",
                object.display_name, end_time, comment
            );
        }
        Action::Disable => {
            session
                .stop_maintenance(&object, Utc::now())
                .await
                .map_err(|e| RunError::Toggle {
                    target: object.display_name.clone(),
                    operation: "stop maintenance".to_string(),
                    reason: e.to_string(),
                })?;
            info!("Maintenance stopped for {}", object.display_name);
        }
    }

    Ok(())
}

fn local_fqdn() -> Result<String, RunError> {
    let name = hostname::get().map_err(|e| RunError::Resolution {
        fqdn: "local host".to_string(),
        reason: format!("could not determine the local host name: {}", e),
    })?;

    name.into_string().map_err(|raw| RunError::Resolution {
        fqdn: "local host".to_string(),
        reason: format!("local host name is not valid UTF-8: {:?}", raw),
    })
}
