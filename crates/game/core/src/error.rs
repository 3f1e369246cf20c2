//! Common error infrastructure for game-core.
//!
//! Combat formulas are total and never fail. Errors only appear at the
//! engine boundary, where a caller can ask for something the battle's
//! lifecycle no longer allows.

use crate::state::Role;

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request; retrying without changes will fail again.
    Validation,
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Side that attempted the action, if known.
    pub actor: Option<Role>,
    /// Action nonce at the time of the error.
    pub nonce: u64,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64) -> Self {
        Self { actor: None, nonce }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: Role) -> Self {
        self.actor = Some(actor);
        self
    }
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}
