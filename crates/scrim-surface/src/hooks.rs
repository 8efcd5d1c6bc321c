#![forbid(unsafe_code)]

//! Lifecycle hooks observing a surface's appearing/disappearing transitions.
//!
//! A surface carries an ordered list of [`LifecycleHook`]s. Each transition
//! calls the matching begin pair before any animation and the end pair after
//! it, walking the list in registration order. Every method has a no-op
//! default, so a hook implements only the stages it cares about.
//!
//! Synchronous stages report failure through [`HookError`]; asynchronous
//! stages return a [`Completion`](scrim_core::Completion) the transition
//! blocks on before moving to the next hook.

use std::fmt;

use scrim_core::Completion;

use crate::surface::{PopupSurface, TransitionKind};

/// Which stage of a transition a hook method belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookStage {
    AppearingBeginSync,
    AppearingBeginAsync,
    AppearingEndSync,
    AppearingEndAsync,
    DisappearingBeginSync,
    DisappearingBeginAsync,
    DisappearingEndSync,
    DisappearingEndAsync,
}

impl HookStage {
    /// Short label for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::AppearingBeginSync => "appearing begin",
            Self::AppearingBeginAsync => "appearing begin async",
            Self::AppearingEndSync => "appearing end",
            Self::AppearingEndAsync => "appearing end async",
            Self::DisappearingBeginSync => "disappearing begin",
            Self::DisappearingBeginAsync => "disappearing begin async",
            Self::DisappearingEndSync => "disappearing end",
            Self::DisappearingEndAsync => "disappearing end async",
        }
    }

    /// The transition this stage belongs to.
    pub fn transition(self) -> TransitionKind {
        match self {
            Self::AppearingBeginSync
            | Self::AppearingBeginAsync
            | Self::AppearingEndSync
            | Self::AppearingEndAsync => TransitionKind::Appearing,
            Self::DisappearingBeginSync
            | Self::DisappearingBeginAsync
            | Self::DisappearingEndSync
            | Self::DisappearingEndAsync => TransitionKind::Disappearing,
        }
    }
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure reported by a synchronous hook stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookError {
    message: String,
}

impl HookError {
    /// Create a hook error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HookError {}

impl From<String> for HookError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HookError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Observer of one surface's transition lifecycle.
///
/// Hooks receive the surface itself, so a begin hook can still reconfigure
/// it (for example enable animation) before the transition reads those
/// settings. A hook calling back into `appearing`/`disappearing` on the
/// surface it is observing gets an already-running error, not a deadlock.
///
/// All methods default to no-ops that succeed immediately.
#[allow(unused_variables)]
pub trait LifecycleHook: Send {
    /// Synchronous work before the appearing animation.
    fn on_appearing_begin(&mut self, surface: &mut PopupSurface) -> Result<(), HookError> {
        Ok(())
    }

    /// Asynchronous work before the appearing animation.
    fn appearing_begin_async(&mut self, surface: &mut PopupSurface) -> Completion {
        Completion::ready()
    }

    /// Synchronous work after the appearing animation.
    fn on_appearing_end(&mut self, surface: &mut PopupSurface) -> Result<(), HookError> {
        Ok(())
    }

    /// Asynchronous work after the appearing animation.
    fn appearing_end_async(&mut self, surface: &mut PopupSurface) -> Completion {
        Completion::ready()
    }

    /// Synchronous work before the disappearing animation.
    fn on_disappearing_begin(&mut self, surface: &mut PopupSurface) -> Result<(), HookError> {
        Ok(())
    }

    /// Asynchronous work before the disappearing animation.
    fn disappearing_begin_async(&mut self, surface: &mut PopupSurface) -> Completion {
        Completion::ready()
    }

    /// Synchronous work after the disappearing animation.
    fn on_disappearing_end(&mut self, surface: &mut PopupSurface) -> Result<(), HookError> {
        Ok(())
    }

    /// Asynchronous work after the disappearing animation.
    fn disappearing_end_async(&mut self, surface: &mut PopupSurface) -> Completion {
        Completion::ready()
    }
}
