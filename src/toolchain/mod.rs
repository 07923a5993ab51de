//! toolchain
//!
//! Abstraction over the external collaborators that validate, render,
//! compile, and scaffold resumes.
//!
//! # Modules
//!
//! - `traits`: Core `Toolchain` trait and `ToolchainError`
//! - [`process`]: Implementation running the configured executables
//! - [`mock`]: Mock implementation for deterministic testing

pub mod mock;
pub mod process;
mod traits;

pub use process::ProcessToolchain;
pub use traits::*;
