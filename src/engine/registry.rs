//! engine::registry
//!
//! Immutable table of operations.
//!
//! # Invariants
//!
//! - Names are unique; registering a duplicate name is rejected
//! - Insertion order is preserved and determines help ordering
//! - The table is read-only once built

use super::Operation;

/// Ordered table of operations, keyed by name.
#[derive(Default)]
pub struct Registry {
    operations: Vec<Box<dyn Operation>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation, builder style.
    ///
    /// # Panics
    ///
    /// Panics if an operation with the same name is already registered.
    pub fn with(mut self, operation: impl Operation + 'static) -> Self {
        assert!(
            self.get(operation.name()).is_none(),
            "operation '{}' registered twice",
            operation.name()
        );
        self.operations.push(Box::new(operation));
        self
    }

    /// Look up an operation by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&dyn Operation> {
        self.operations
            .iter()
            .find(|op| op.name() == name)
            .map(|op| op.as_ref())
    }

    /// Operations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Operation> {
        self.operations.iter().map(|op| op.as_ref())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|op| op.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
