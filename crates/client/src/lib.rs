//! idpctl_client - CLI client for managing identity providers.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use std::io::Write;

use cli::{Cli, Commands};
use commands::Context;

pub use client::{AclClient, InMemoryIdentityProviders};
pub use config::ClientConfig;
pub use error::{ClientError, Result};

/// Run a parsed command line against the HTTP API. Returns the process exit code.
pub async fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    let client = match ClientConfig::from_args(&cli.connection).and_then(|c| AclClient::new(&c)) {
        Ok(client) => client,
        Err(e) => {
            let _ = writeln!(err, "Error initializing API client: {}", e);
            return 1;
        }
    };
    tracing::debug!(addr = %client.base_url(), "using access-control API");

    let ctx = Context::new(cli.format).with_quiet(cli.quiet);
    let Commands::Idp(cmd) = cli.command;
    commands::execute(&client, cmd.action, &ctx, out, err).await
}
