//! CLI command definitions.

pub mod idp;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_HTTP_ADDR, DEFAULT_TIMEOUT_SECS};

/// Manage identity providers on an access-control API.
#[derive(Debug, Parser)]
#[command(name = "idpctl")]
#[command(about = "Manage identity providers on an access-control API", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command for reaching the API.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Address of the access-control HTTP API.
    #[arg(long, global = true, env = "IDPCTL_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    pub http_addr: String,

    /// ACL token to use for the request.
    #[arg(long, global = true, env = "IDPCTL_HTTP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "IDPCTL_HTTP_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Identity provider management.
    Idp(idp::IdpCommand),
}
