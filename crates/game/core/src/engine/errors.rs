//! Error types for action execution.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::Role;

/// Errors surfaced while executing an action through the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("battle is already over ({winner} won); no further actions are accepted")]
    BattleOver {
        winner: Role,
        context: ErrorContext,
    },
}

impl ExecuteError {
    pub(crate) fn battle_over(winner: Role, actor: Role, nonce: u64) -> Self {
        Self::BattleOver {
            winner,
            context: ErrorContext::new(nonce).with_actor(actor),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BattleOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::BattleOver { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleOver { .. } => "BATTLE_OVER",
        }
    }
}
