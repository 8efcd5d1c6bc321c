#![forbid(unsafe_code)]

//! Transition failures.

use std::fmt;

use scrim_core::CompletionError;

use crate::hooks::HookStage;
use crate::surface::TransitionKind;

/// Why an appearing or disappearing transition did not complete.
///
/// Failure leaves the surface out of transition: the next call to
/// `appearing`/`disappearing` starts fresh rather than resuming.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    /// A lifecycle hook failed. Later hooks and stages did not run.
    Hook {
        /// Stage the failing hook belonged to.
        stage: HookStage,
        /// The hook's failure message.
        message: String,
    },
    /// The animation strategy's completion settled unsuccessfully.
    Strategy(CompletionError),
    /// A transition was requested while another was still running.
    AlreadyRunning {
        /// The transition that was already in flight.
        active: TransitionKind,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hook { stage, message } => {
                write!(f, "{stage} hook failed: {message}")
            }
            Self::Strategy(err) => write!(f, "animation strategy failed: {err}"),
            Self::AlreadyRunning { active } => {
                write!(f, "a {} transition is already running", active.label())
            }
        }
    }
}

impl std::error::Error for TransitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Strategy(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompletionError> for TransitionError {
    fn from(err: CompletionError) -> Self {
        Self::Strategy(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_stage() {
        let err = TransitionError::Hook {
            stage: HookStage::AppearingBeginSync,
            message: "content not ready".into(),
        };
        assert_eq!(
            err.to_string(),
            "appearing begin hook failed: content not ready"
        );
    }

    #[test]
    fn strategy_failure_chains_its_source() {
        let err = TransitionError::Strategy(CompletionError::Abandoned);
        assert!(err.to_string().contains("abandoned"));
        assert!(err.source().is_some());
    }

    #[test]
    fn already_running_names_the_active_kind() {
        let err = TransitionError::AlreadyRunning {
            active: TransitionKind::Disappearing,
        };
        assert_eq!(err.to_string(), "a disappearing transition is already running");
    }
}
