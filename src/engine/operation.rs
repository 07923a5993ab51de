//! engine::operation
//!
//! Operation trait for registry integration.
//!
//! # Architecture
//!
//! Every command the tool supports implements `Operation`. An operation owns
//! its argument contract (the clap subcommand it contributes) and its action.
//! The dispatcher never inspects an operation's options: it hands the
//! matched `ArgMatches` back to the operation that defined them.
//!
//! # Example
//!
//! ```ignore
//! use clap::{Args, FromArgMatches};
//!
//! #[derive(Args, Debug)]
//! struct ValidateArgs {
//!     source: PathBuf,
//! }
//!
//! struct Validate;
//!
//! #[async_trait]
//! impl Operation for Validate {
//!     fn name(&self) -> &'static str { "validate" }
//!
//!     fn command(&self) -> clap::Command {
//!         ValidateArgs::augment_args(clap::Command::new(self.name()))
//!     }
//!
//!     async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
//!         let args = ValidateArgs::from_arg_matches(matches)?;
//!         ctx.toolchain.validate(ctx, &args.source).await?;
//!         Ok(())
//!     }
//! }
//! ```

use async_trait::async_trait;
use clap::ArgMatches;

use super::{ActionResult, Context};

/// A named unit of work the tool can perform.
#[async_trait]
pub trait Operation: Send + Sync {
    /// Unique subcommand name, matched exactly and case-sensitively.
    fn name(&self) -> &'static str;

    /// The clap subcommand describing this operation's arguments.
    ///
    /// Its name must equal [`Operation::name`].
    fn command(&self) -> clap::Command;

    /// Execute the operation with the matches parsed from [`Operation::command`].
    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult;
}
