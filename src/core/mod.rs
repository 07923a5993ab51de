//! core
//!
//! Core domain types shared by the CLI and the toolchain.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ResumeSource, BuildOptions
//! - [`failure`] - CommandFailure and ExitOutcome
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod failure;
pub mod types;

pub use failure::{CommandFailure, ExitOutcome};
