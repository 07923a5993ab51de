//! yamlresume - Resume as Code in YAML
//!
//! yamlresume turns a structured resume description (YAML or JSON) into a
//! typeset document. This crate is the command layer: it decides from argv
//! which operation to run, runs it through the external toolchain, and
//! turns the outcome into an exit status.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing, shorthand resolution, and dispatch
//! - [`engine`] - Operation trait, registry, and execution context
//! - [`toolchain`] - External collaborators (renderer, LaTeX engine)
//! - [`core`] - Domain types, failures, and configuration
//! - [`ui`] - User-facing output
//! - [`telemetry`] - Logging setup
//!
//! # Invariants
//!
//! 1. At most one operation runs per invocation
//! 2. Verbosity is resolved before any operation starts
//! 3. Every failure maps to exactly one exit status

pub mod cli;
pub mod core;
pub mod engine;
pub mod telemetry;
pub mod toolchain;
pub mod ui;
