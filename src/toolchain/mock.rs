//! toolchain::mock
//!
//! Mock toolchain implementation for deterministic testing.
//!
//! # Design
//!
//! The mock records every call together with the `verbose` flag of the
//! context it was given, and can be configured to fail one kind of call.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use yamlresume::core::config::Config;
//! use yamlresume::engine::Context;
//! use yamlresume::toolchain::mock::{MockCall, MockToolchain};
//! use yamlresume::toolchain::{Toolchain, ToolchainError};
//!
//! # tokio_test::block_on(async {
//! let toolchain = MockToolchain::new().fail_on(
//!     "compile",
//!     ToolchainError::Exited { program: "xelatex".to_string(), code: 1 },
//! );
//! let ctx = Context::new(false, Config::default(), Arc::new(toolchain.clone()));
//!
//! toolchain.validate(&ctx, Path::new("resume.yml")).await.unwrap();
//! assert!(toolchain.compile(&ctx, Path::new("resume.tex")).await.is_err());
//!
//! assert_eq!(
//!     toolchain.calls(),
//!     vec![
//!         MockCall::Validate { source: "resume.yml".into() },
//!         MockCall::Compile { tex: "resume.tex".into() },
//!     ]
//! );
//! # });
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{Toolchain, ToolchainError};
use crate::engine::Context;

/// Recorded toolchain call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Scaffold {
        target: PathBuf,
        template: Option<String>,
    },
    Validate {
        source: PathBuf,
    },
    Render {
        source: PathBuf,
        output: PathBuf,
    },
    Compile {
        tex: PathBuf,
    },
    Languages,
    Templates,
}

impl MockCall {
    /// Name used with [`MockToolchain::fail_on`].
    pub fn kind(&self) -> &'static str {
        match self {
            MockCall::Scaffold { .. } => "scaffold",
            MockCall::Validate { .. } => "validate",
            MockCall::Render { .. } => "render",
            MockCall::Compile { .. } => "compile",
            MockCall::Languages => "languages",
            MockCall::Templates => "templates",
        }
    }
}

/// Mock toolchain for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockToolchain {
    inner: Arc<Mutex<MockToolchainInner>>,
}

#[derive(Debug, Default)]
struct MockToolchainInner {
    /// Calls with the context's verbose flag at call time.
    calls: Vec<(MockCall, bool)>,
    fail_on: Option<(&'static str, ToolchainError)>,
}

impl MockToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail every call of the given kind.
    pub fn fail_on(self, kind: &'static str, err: ToolchainError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some((kind, err));
        }
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        let inner = self.inner.lock().unwrap();
        inner.calls.iter().map(|(call, _)| call.clone()).collect()
    }

    /// The `verbose` flag seen by each recorded call.
    pub fn verbose_flags(&self) -> Vec<bool> {
        let inner = self.inner.lock().unwrap();
        inner.calls.iter().map(|(_, verbose)| *verbose).collect()
    }

    fn record(&self, ctx: &Context, call: MockCall) -> Result<(), ToolchainError> {
        let mut inner = self.inner.lock().unwrap();
        let kind = call.kind();
        inner.calls.push((call, ctx.verbose));
        match &inner.fail_on {
            Some((fail_kind, err)) if *fail_kind == kind => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Toolchain for MockToolchain {
    async fn scaffold(
        &self,
        ctx: &Context,
        target: &Path,
        template: Option<&str>,
    ) -> Result<(), ToolchainError> {
        self.record(
            ctx,
            MockCall::Scaffold {
                target: target.to_path_buf(),
                template: template.map(str::to_string),
            },
        )
    }

    async fn validate(&self, ctx: &Context, source: &Path) -> Result<(), ToolchainError> {
        self.record(
            ctx,
            MockCall::Validate {
                source: source.to_path_buf(),
            },
        )
    }

    async fn render(
        &self,
        ctx: &Context,
        source: &Path,
        output: &Path,
    ) -> Result<(), ToolchainError> {
        self.record(
            ctx,
            MockCall::Render {
                source: source.to_path_buf(),
                output: output.to_path_buf(),
            },
        )
    }

    async fn compile(&self, ctx: &Context, tex: &Path) -> Result<(), ToolchainError> {
        self.record(
            ctx,
            MockCall::Compile {
                tex: tex.to_path_buf(),
            },
        )
    }

    async fn languages(&self, ctx: &Context) -> Result<String, ToolchainError> {
        self.record(ctx, MockCall::Languages)?;
        Ok("en\tEnglish\nfr\tFrench\n".to_string())
    }

    async fn templates(&self, ctx: &Context) -> Result<String, ToolchainError> {
        self.record(ctx, MockCall::Templates)?;
        Ok("moderncv-classic\tModernCV classic style\n".to_string())
    }
}
