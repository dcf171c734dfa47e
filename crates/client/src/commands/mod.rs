//! Command runners.
//!
//! Each runner validates its flags, makes at most two sequential calls through
//! [`IdentityProviderApi`] and writes its result to the output sink. Failures are
//! returned as [`CommandError`] and written to the error sink by [`execute`].

pub mod create;
pub mod error;
pub mod list;
pub mod read;
pub mod update;

use std::io::Write;

use idpctl_core::acl::{IdentityProvider, IdentityProviderApi};

use crate::cli::idp::IdpAction;
use crate::cli::OutputFormat;
use crate::output;

pub use error::CommandError;

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Create a context with the given output format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            quiet: false,
        }
    }

    /// Sets whether write results are echoed.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Write a single identity provider.
    fn print(&self, out: &mut dyn Write, idp: &IdentityProvider) -> Result<(), CommandError> {
        writeln!(out, "{}", output::format_identity_provider(idp, self.format))?;
        Ok(())
    }

    /// Write the result of a create or update unless `--quiet` was given.
    fn print_written(
        &self,
        out: &mut dyn Write,
        idp: &IdentityProvider,
    ) -> Result<(), CommandError> {
        if self.quiet {
            return Ok(());
        }
        self.print(out, idp)
    }
}

/// Run one identity provider action.
pub async fn run_action<A>(
    api: &A,
    action: IdpAction,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<(), CommandError>
where
    A: IdentityProviderApi + ?Sized,
{
    match action {
        IdpAction::Create(args) => create::run(api, args, ctx, out).await,
        IdpAction::Read(args) => read::run(api, args, ctx, out).await,
        IdpAction::List => list::run(api, ctx, out).await,
        IdpAction::Update(args) => update::run(api, args, ctx, out).await,
    }
}

/// Run one action and report any failure on `err`. Returns the process exit code.
pub async fn execute<A>(
    api: &A,
    action: IdpAction,
    ctx: &Context,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    A: IdentityProviderApi + ?Sized,
{
    match run_action(api, action, ctx, out).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            // Nothing else to report to if stderr itself is gone.
            let _ = writeln!(err, "{}", e);
            e.exit_code()
        }
    }
}
