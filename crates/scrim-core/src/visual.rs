#![forbid(unsafe_code)]

//! Animatable visual state and the shared handle strategies mutate.
//!
//! [`VisualState`] is the full set of properties an animation strategy may
//! drive: uniform scale, opacity, and a translation offset. [`ContentHandle`]
//! wraps one behind `Arc<Mutex<..>>` so a strategy running on a worker thread
//! and the surface that owns the content can observe the same values.
//!
//! Writes are equality-gated: setting the state a handle already holds is a
//! no-op and does not bump the version counter, so renderers polling
//! [`ContentHandle::version`] see only real changes.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Visual properties a transition animates.
///
/// `scale` is uniform around the content center. `offset_x`/`offset_y` are a
/// translation in the same units as the surface bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    pub scale: f64,
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl VisualState {
    /// Fully visible, unscaled, untranslated.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Identity with the given opacity.
    pub const fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }

    /// Identity with the given uniform scale.
    pub const fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Identity with the given translation offset.
    pub const fn with_offset(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::IDENTITY
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

struct VisualInner {
    state: VisualState,
    version: u64,
}

/// Shared, thread-safe handle to a surface's animatable visual state.
///
/// Cheap to clone; all clones observe the same state. A strategy keeps a
/// clone for the duration of a transition and drives it from whatever thread
/// the animation runs on.
#[derive(Clone)]
pub struct ContentHandle {
    inner: Arc<Mutex<VisualInner>>,
}

impl ContentHandle {
    /// Create a handle starting at [`VisualState::IDENTITY`].
    pub fn new() -> Self {
        Self::with_state(VisualState::IDENTITY)
    }

    /// Create a handle starting at the given state.
    pub fn with_state(state: VisualState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VisualInner { state, version: 0 })),
        }
    }

    /// Current visual state.
    pub fn get(&self) -> VisualState {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).state
    }

    /// Replace the visual state.
    ///
    /// Returns `true` if the value changed. Setting an equal state is a
    /// no-op and leaves the version untouched.
    pub fn set(&self, state: VisualState) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.state == state {
            return false;
        }
        inner.state = state;
        inner.version = inner.version.wrapping_add(1);
        true
    }

    /// Mutate the state in place under the lock.
    ///
    /// The version bumps only if the closure actually changed the value.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut VisualState),
    {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let before = inner.state;
        f(&mut inner.state);
        if inner.state == before {
            return false;
        }
        inner.version = inner.version.wrapping_add(1);
        true
    }

    /// Reset to [`VisualState::IDENTITY`].
    pub fn reset(&self) -> bool {
        self.set(VisualState::IDENTITY)
    }

    /// Monotonic change counter. Bumps on every real state change.
    pub fn version(&self) -> u64 {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).version
    }
}

impl Default for ContentHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("ContentHandle")
            .field("state", &inner.state)
            .field("version", &inner.version)
            .finish()
    }
}
