//! cli::dispatch
//!
//! Resolve argv into at most one action and translate its outcome into an
//! exit status.
//!
//! # Resolution
//!
//! ```text
//! argv -> drop unknown flags ahead of a resume path -> clap parse
//!   no subcommand             -> help, exit 0
//!   registered operation      -> verbosity hook -> operation action
//!   anything else             -> shorthand resolver
//!       resume path           -> verbosity hook -> build action
//!       other token           -> "unknown command", help, exit 1
//! ```
//!
//! # Invariants
//!
//! - The verbosity hook runs exactly once, before the action, on both the
//!   explicit and shorthand paths. It never runs when no action runs.
//! - Failures are translated once, by [`CommandFailure::exit_outcome`].
//! - All output, the dispatcher's and the operation's, goes through one
//!   [`Console`].

use std::ffi::OsString;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{ArgMatches, FromArgMatches};

use super::args::{root_command, GlobalArgs, RootFlags};
use super::commands::build_resume;
use super::shorthand::{self, Shorthand, ShorthandFlags, ShorthandInvocation};
use crate::core::config::Config;
use crate::core::{CommandFailure, ExitOutcome};
use crate::engine::{run_to_completion, Context, Operation, Registry};
use crate::telemetry;
use crate::toolchain::{ProcessToolchain, Toolchain};
use crate::ui::output::Console;

/// What an argument vector resolved to.
#[derive(Debug)]
pub enum Invocation {
    /// Nothing to run; show help.
    Help,
    /// A registered operation with its own matches.
    Operation {
        name: String,
        matches: ArgMatches,
        verbose: bool,
    },
    /// The bare-file form of `build`.
    Shorthand(ShorthandInvocation),
    /// A token that is neither an operation nor a resume path.
    UnknownCommand(String),
}

/// The action selected for execution.
enum Target<'a> {
    Operation(&'a dyn Operation, &'a ArgMatches),
    Shorthand(&'a ShorthandInvocation),
}

type VerbosityHook = Box<dyn Fn(bool) + Send + Sync>;

/// Top-level controller.
pub struct Dispatcher {
    registry: Registry,
    config: Option<Config>,
    toolchain: Option<Arc<dyn Toolchain>>,
    console: Console,
    verbosity_hook: VerbosityHook,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`.
    ///
    /// Configuration is loaded from disk, the process toolchain is used and
    /// output goes to the process streams unless overridden.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            config: None,
            toolchain: None,
            console: Console::stdio(),
            verbosity_hook: Box::new(telemetry::set_verbosity),
        }
    }

    /// Use `config` instead of loading configuration files.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use `toolchain` instead of one built from configuration.
    pub fn with_toolchain(mut self, toolchain: Arc<dyn Toolchain>) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    /// Send all output, including the operation's, to `console`.
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Replace the verbosity hook.
    pub fn with_verbosity_hook(mut self, hook: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.verbosity_hook = Box::new(hook);
        self
    }

    /// The root command, with every registered operation attached.
    pub fn command(&self) -> clap::Command {
        root_command(&self.registry)
    }

    /// Resolve an argument vector (including the binary name).
    ///
    /// # Errors
    ///
    /// Returns clap's error for malformed arguments, and for `--help` /
    /// `--version`, which clap reports through the error path.
    pub fn resolve<I, T>(&self, args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = self.command();
        let root_flags = RootFlags::of(&command);
        let prepared = shorthand::prepare(
            args.into_iter().map(Into::into).collect(),
            |flag| root_flags.accepts(flag),
        );

        let matches = command.try_get_matches_from(prepared.args)?;
        let globals = GlobalArgs::from_arg_matches(&matches)?;

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Ok(Invocation::Help);
        };

        if self.registry.get(name).is_some() {
            let verbose = globals.verbose || flag(sub_matches, "verbose");
            return Ok(Invocation::Operation {
                name: name.to_string(),
                matches: sub_matches.clone(),
                verbose,
            });
        }

        let mut tokens = vec![name.to_string()];
        if let Ok(Some(rest)) = sub_matches.try_get_many::<String>("") {
            tokens.extend(rest.cloned());
        }

        let flags = ShorthandFlags {
            pdf: !globals.no_pdf,
            validate: !globals.no_validate,
            verbose: globals.verbose,
        };

        Ok(match shorthand::resolve(&tokens, flags) {
            Some(Shorthand::Build(mut invocation)) => {
                if let Some(file) = prepared.file {
                    invocation.file = file;
                }
                let mut ignored = prepared.ignored;
                ignored.append(&mut invocation.ignored);
                invocation.ignored = ignored;
                Invocation::Shorthand(invocation)
            }
            Some(Shorthand::UnknownCommand(token)) => Invocation::UnknownCommand(token),
            None => Invocation::Help,
        })
    }

    /// Run one invocation end to end.
    pub fn dispatch<I, T>(&self, args: I) -> ExitOutcome
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let invocation = match self.resolve(args) {
            Ok(invocation) => invocation,
            Err(e) => return self.report_clap_error(&e),
        };

        match invocation {
            Invocation::Help => {
                self.write_help();
                ExitOutcome::success()
            }
            Invocation::UnknownCommand(token) => {
                self.console
                    .error(format!("error: unknown command '{}'", token));
                self.console.error("");
                self.write_help();
                ExitOutcome::failure(1)
            }
            Invocation::Operation {
                name,
                matches,
                verbose,
            } => match self.registry.get(&name) {
                Some(op) => self.execute(verbose, Target::Operation(op, &matches)),
                None => ExitOutcome::failure(1),
            },
            Invocation::Shorthand(invocation) => {
                self.execute(invocation.verbose, Target::Shorthand(&invocation))
            }
        }
    }

    /// Apply verbosity, build the context, run the action, translate.
    fn execute(&self, verbose: bool, target: Target<'_>) -> ExitOutcome {
        (self.verbosity_hook)(verbose);

        let result = self
            .context(verbose)
            .map_err(|e| CommandFailure::new(format!("{:#}", e)))
            .and_then(|ctx| {
                run_to_completion(async move {
                    match target {
                        Target::Operation(op, matches) => {
                            tracing::debug!(operation = op.name(), "running operation");
                            op.run(&ctx, matches).await
                        }
                        Target::Shorthand(invocation) => {
                            tracing::debug!(
                                file = %invocation.file.display(),
                                "running shorthand build"
                            );
                            for token in &invocation.ignored {
                                tracing::debug!(%token, "ignoring unrecognized argument");
                            }
                            build_resume(&ctx, &invocation.source(), invocation.options()).await
                        }
                    }
                })
            });

        match result {
            Ok(()) => ExitOutcome::success(),
            Err(failure) => {
                self.console.error(&failure);
                failure.exit_outcome()
            }
        }
    }

    /// Resolve configuration and toolchain for one invocation.
    fn context(&self, verbose: bool) -> anyhow::Result<Context> {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => {
                let cwd = std::env::current_dir().context("failed to read working directory")?;
                Config::load(Some(cwd.as_path()))?
            }
        };

        let toolchain = match &self.toolchain {
            Some(toolchain) => Arc::clone(toolchain),
            None => Arc::new(ProcessToolchain::from_config(&config)) as Arc<dyn Toolchain>,
        };

        Ok(Context::new(verbose, config, toolchain).with_console(self.console.clone()))
    }

    fn write_help(&self) {
        self.console.write_out(self.command().render_long_help());
    }

    /// Print a clap error (or `--help`/`--version` output) to the right stream.
    fn report_clap_error(&self, e: &clap::Error) -> ExitOutcome {
        let rendered = e.render();
        if e.use_stderr() {
            self.console.write_err(rendered);
        } else {
            self.console.write_out(rendered);
        }

        match e.exit_code() {
            0 => ExitOutcome::success(),
            code => ExitOutcome::failure(code),
        }
    }
}

/// Read a boolean flag that may not be defined on `matches`.
fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
