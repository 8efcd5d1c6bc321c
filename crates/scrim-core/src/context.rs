#![forbid(unsafe_code)]

//! Surface identity and the read-only context snapshot handed to policies.
//!
//! [`SurfaceId`] is a process-unique identifier minted from a global counter.
//! [`SurfaceContext`] is a plain-value snapshot of a surface's observable
//! state at one instant; dismiss policies and animation strategies receive it
//! instead of a borrow of the surface itself, so they can run while the
//! surface is mid-mutation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{Bounds, Insets};

static SURFACE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for a popup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Mint the next unique id.
    pub fn next() -> Self {
        Self(SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Point-in-time snapshot of a surface's observable state.
///
/// Copy semantics are deliberate: a context never aliases the surface it was
/// taken from, and holding one past the snapshot instant shows stale values,
/// not torn ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContext {
    /// Identity of the surface this snapshot was taken from.
    pub id: SurfaceId,
    /// Outer box assigned by the host, before padding.
    pub bounds: Bounds,
    /// Inner box the content occupies after padding was applied.
    pub content_bounds: Bounds,
    /// Padding reserved for system chrome.
    pub system_padding: Insets,
    /// Whether `system_padding` participates in layout.
    pub has_system_padding: bool,
    /// Whether transitions run their animation step.
    pub is_animating: bool,
    /// Default answer for the background-tap dismiss decision.
    pub close_on_background_tap: bool,
    /// Whether a disappearing transition is already in flight.
    pub is_being_dismissed: bool,
}
