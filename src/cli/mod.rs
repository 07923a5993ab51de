//! cli
//!
//! Command-line interface layer for yamlresume.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the bare-file shorthand
//! - Dispatch to exactly one operation and produce the exit status
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands the
//! selected operation to the [`crate::engine`] runner. All document work
//! flows through the [`crate::toolchain`].

pub mod args;
pub mod commands;
pub mod dispatch;
pub mod shorthand;

pub use dispatch::{Dispatcher, Invocation};

use crate::core::ExitOutcome;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitOutcome {
    Dispatcher::new(commands::standard_registry()).dispatch(std::env::args_os())
}
