//! engine
//!
//! Execution model shared by every operation.
//!
//! # Architecture
//!
//! - [`operation`] - The `Operation` trait each command implements
//! - [`registry`] - Immutable, ordered table of operations
//! - [`runner`] - Runs an async action to completion
//!
//! # Invariants
//!
//! - At most one operation action runs per invocation
//! - The [`Context`] is fully resolved before any action starts
//! - Actions report failure only through [`CommandFailure`]

pub mod operation;
pub mod registry;
pub mod runner;

pub use operation::Operation;
pub use registry::Registry;
pub use runner::run_to_completion;

use std::fmt;
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::CommandFailure;
use crate::toolchain::Toolchain;
use crate::ui::output::Console;

/// Execution context for operations.
///
/// Built once per invocation after global flags are resolved, and passed by
/// reference to every action.
#[derive(Clone)]
pub struct Context {
    /// Verbose logging enabled.
    pub verbose: bool,
    /// Resolved configuration.
    pub config: Config,
    /// External collaborators.
    pub toolchain: Arc<dyn Toolchain>,
    /// Where user-facing output goes.
    pub console: Console,
}

impl Context {
    /// Create a context writing to the process streams.
    pub fn new(verbose: bool, config: Config, toolchain: Arc<dyn Toolchain>) -> Self {
        Self {
            verbose,
            config,
            toolchain,
            console: Console::stdio(),
        }
    }

    /// Replace the console.
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("verbose", &self.verbose)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Result of an operation action.
pub type ActionResult = Result<(), CommandFailure>;
