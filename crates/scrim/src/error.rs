#![forbid(unsafe_code)]

//! Unified error surface for the `scrim` facade.
//!
//! Each subsystem reports failure with its own enum: completions settle with
//! [`CompletionError`], transitions fail with [`TransitionError`], and stack
//! operations with [`StackError`]. Code driving the whole system through
//! [`Presenter`](crate::Presenter) usually wants a single error type and a
//! single answer to "what now?", which this module provides.
//!
//! # Design Principles
//!
//! 1. **Wrap, don't flatten.** [`Error`] keeps the subsystem enum intact so
//!    callers can still match on the precise cause.
//! 2. **Every failure names a recovery.** [`Error::recovery`] maps each
//!    cause to the [`RecoveryAction`] an embedder should take. Nothing in
//!    scrim is fatal: a failed transition leaves its surface idle and
//!    consistent.
//! 3. **Stable labels.** [`Error::error_type`] and [`RecoveryAction::label`]
//!    return snake_case identifiers fit for log fields, and tests pin them.

use std::fmt;

use scrim_core::CompletionError;
use scrim_nav::StackError;
use scrim_surface::{TransitionError, TransitionKind};

// ── Unified error ────────────────────────────────────────────────────────

/// Any failure the scrim facade can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An asynchronous completion settled unsuccessfully.
    Completion(CompletionError),
    /// An appearing or disappearing transition failed.
    Transition(TransitionError),
    /// A popup stack operation failed.
    Stack(StackError),
}

/// Convenience alias for facade results.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable snake_case label naming the failing subsystem.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Completion(_) => "completion",
            Self::Transition(_) => "transition",
            Self::Stack(_) => "stack",
        }
    }

    /// What the embedder should do about this failure.
    pub fn recovery(&self) -> RecoveryAction {
        match self {
            Self::Completion(_) => RecoveryAction::RetryTransition,
            Self::Transition(err) => transition_recovery(err),
            Self::Stack(err) => match err {
                StackError::Empty | StackError::NotFound(_) => RecoveryAction::DropRequest,
                StackError::AlreadyDismissing(_) => RecoveryAction::AwaitTransition,
                StackError::Transition(err) => transition_recovery(err),
                _ => RecoveryAction::DropRequest,
            },
        }
    }
}

fn transition_recovery(err: &TransitionError) -> RecoveryAction {
    match err {
        // A vetoed dismissal is not an accident to retry blindly; the
        // surface deliberately stays up.
        TransitionError::Hook { stage, .. } => match stage.transition() {
            TransitionKind::Appearing => RecoveryAction::RetryTransition,
            TransitionKind::Disappearing => RecoveryAction::KeepPresented,
        },
        TransitionError::AlreadyRunning { .. } => RecoveryAction::AwaitTransition,
        _ => RecoveryAction::RetryTransition,
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completion(err) => write!(f, "{err}"),
            Self::Transition(err) => write!(f, "{err}"),
            Self::Stack(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Completion(err) => Some(err),
            Self::Transition(err) => Some(err),
            Self::Stack(err) => Some(err),
        }
    }
}

impl From<CompletionError> for Error {
    fn from(err: CompletionError) -> Self {
        Self::Completion(err)
    }
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        Self::Transition(err)
    }
}

impl From<StackError> for Error {
    fn from(err: StackError) -> Self {
        Self::Stack(err)
    }
}

// ── Recovery actions ─────────────────────────────────────────────────────

/// What an embedder should do after a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// The surface is idle again; re-run the same transition.
    RetryTransition,
    /// Another transition holds the surface; wait for it to settle.
    AwaitTransition,
    /// A dismissal was refused; the surface stays presented.
    KeepPresented,
    /// The request targeted a surface that is not there; discard it.
    DropRequest,
}

impl RecoveryAction {
    /// Stable snake_case label for log fields.
    pub fn label(self) -> &'static str {
        match self {
            Self::RetryTransition => "retry_transition",
            Self::AwaitTransition => "await_transition",
            Self::KeepPresented => "keep_presented",
            Self::DropRequest => "drop_request",
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
