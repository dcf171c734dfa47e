//! idpctl CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use idpctl_client::cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "idpctl_client=debug,idpctl_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = idpctl_client::run(cli, &mut out, &mut err).await;

    ExitCode::from(code)
}
