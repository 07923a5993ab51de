//! cli::commands
//!
//! The operations yamlresume supports.
//!
//! # Architecture
//!
//! Each operation is an independent [`Operation`] descriptor owning its
//! arguments and action. [`standard_registry`] composes them into the
//! immutable table the dispatcher reads; adding an operation means adding a
//! module here and one `.with(...)` line.
//!
//! # Async Operations
//!
//! Actions are async because they await collaborator processes. The
//! dispatcher runs the selected action on a current-thread runtime.

mod build;
mod dev;
mod languages;
mod new;
mod templates;
mod validate;

pub use build::{build_resume, Build, BuildArgs};
pub use dev::{watch, Dev};
pub use languages::Languages;
pub use new::New;
pub use templates::Templates;
pub use validate::Validate;

use crate::engine::Registry;

/// The operations shipped with yamlresume, in help order.
pub fn standard_registry() -> Registry {
    Registry::new()
        .with(New)
        .with(Build)
        .with(Dev)
        .with(Languages)
        .with(Templates)
        .with(Validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_operations_in_order() {
        assert_eq!(
            standard_registry().names(),
            vec!["new", "build", "dev", "languages", "templates", "validate"]
        );
    }

    #[test]
    fn command_names_match_operation_names() {
        for op in standard_registry().iter() {
            assert_eq!(op.command().get_name(), op.name());
        }
    }

    #[test]
    fn every_command_is_well_formed() {
        for op in standard_registry().iter() {
            op.command().debug_assert();
        }
    }
}
