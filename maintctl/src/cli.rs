//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maintctl",
    about = "Toggle monitoring maintenance mode for the local host",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Root directory for log files
    #[arg(long, global = true, default_value = "logs")]
    pub log_root: PathBuf,

    /// Subdirectory under the log root
    #[arg(long, global = true, default_value = "maintenance")]
    pub log_subdir: String,

    /// Fully qualified domain name to operate on (default: local host name)
    #[arg(long, global = true)]
    pub fqdn: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Put the local host into maintenance mode
    Enable {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Maintenance window length in minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        duration: u32,

        /// Free-text comment recorded on the maintenance window
        #[arg(long)]
        comment: String,
    },

    /// Take the local host out of maintenance mode
    Disable {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

impl Command {
    pub fn connection(&self) -> &ConnectionArgs {
        match self {
            Command::Enable { connection, .. } => connection,
            Command::Disable { connection } => connection,
        }
    }
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// Management server address (host, host:port, or full URL)
    #[arg(long)]
    pub server: String,

    /// Domain-qualified account name, e.g. CORP\svc-maint
    #[arg(long)]
    pub account: String,

    /// Account secret (prefer --secret-file to keep it out of process listings)
    #[arg(
        long,
        env = "MAINTCTL_SECRET",
        hide_env_values = true,
        conflicts_with = "secret_file"
    )]
    pub secret: Option<String>,

    /// TOML file with an [accounts] table mapping account names to secrets
    #[arg(long, env = "MAINTCTL_SECRET_FILE")]
    pub secret_file: Option<PathBuf>,
}
