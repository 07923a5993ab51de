//! core::failure
//!
//! The structured failure every operation returns, and the terminal exit
//! status of an invocation.
//!
//! # Exit Codes
//!
//! | Situation | Code |
//! |-----------|------|
//! | Success, including "help displayed" | 0 |
//! | Delegated failure carrying a code `n >= 1` | `n` |
//! | Delegated failure without a usable code | 1 |
//! | Unknown command | 1 |
//!
//! The dispatcher performs exactly one translation from [`CommandFailure`]
//! to [`ExitOutcome`] via [`CommandFailure::exit_outcome`].

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::toolchain::ToolchainError;

/// A failure raised by an operation's action.
///
/// Carries the user-facing message (written to stderr verbatim) and an
/// optional numeric code that becomes the process exit status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandFailure {
    message: String,
    code: Option<i32>,
}

impl CommandFailure {
    /// A failure with no embedded code; exits with 1.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// A failure carrying an explicit numeric code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The embedded code, if the failure exposes one.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Translate into the process exit status.
    ///
    /// Codes below 1 cannot signal failure, so they fall back to 1.
    pub fn exit_outcome(&self) -> ExitOutcome {
        match self.code {
            Some(code) if code >= 1 => ExitOutcome::failure(code),
            _ => ExitOutcome::failure(1),
        }
    }
}

impl From<ToolchainError> for CommandFailure {
    fn from(err: ToolchainError) -> Self {
        let code = err.code();
        Self {
            message: err.to_string(),
            code,
        }
    }
}

impl From<ConfigError> for CommandFailure {
    fn from(err: ConfigError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<std::io::Error> for CommandFailure {
    fn from(err: std::io::Error) -> Self {
        Self {
            code: err.raw_os_error(),
            message: err.to_string(),
        }
    }
}

impl From<clap::Error> for CommandFailure {
    fn from(err: clap::Error) -> Self {
        Self {
            message: err.to_string(),
            code: Some(err.exit_code()),
        }
    }
}

/// Terminal value of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    code: i32,
}

impl ExitOutcome {
    /// Exit status 0.
    pub fn success() -> Self {
        Self { code: 0 }
    }

    /// A non-zero exit status. Non-positive inputs are coerced to 1.
    pub fn failure(code: i32) -> Self {
        Self { code: code.max(1) }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
