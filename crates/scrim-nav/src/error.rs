#![forbid(unsafe_code)]

//! Stack operation failures.

use std::fmt;

use scrim_core::SurfaceId;
use scrim_surface::TransitionError;

/// Why a stack operation did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StackError {
    /// The stack has no surfaces to operate on.
    Empty,
    /// No surface with this id is in the stack.
    NotFound(SurfaceId),
    /// The surface is already mid-dismissal; the duplicate request was
    /// refused.
    AlreadyDismissing(SurfaceId),
    /// The surface's transition failed. The stack state around the failure
    /// is documented on the operation that returned this.
    Transition(TransitionError),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "the popup stack is empty"),
            Self::NotFound(id) => write!(f, "{id} is not in the stack"),
            Self::AlreadyDismissing(id) => {
                write!(f, "{id} is already being dismissed")
            }
            Self::Transition(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransitionError> for StackError {
    fn from(err: TransitionError) -> Self {
        Self::Transition(err)
    }
}
