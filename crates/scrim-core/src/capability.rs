#![forbid(unsafe_code)]

//! Capability contracts between surfaces, animations, and their host.
//!
//! [`AnimationStrategy`] is the pluggable transition behavior a surface may
//! carry; [`NavigationHost`] is the removal capability a host exposes to
//! surfaces so a background tap can request its own dismissal without the
//! surface knowing what container it lives in.

use crate::context::{SurfaceContext, SurfaceId};
use crate::signal::Completion;
use crate::visual::ContentHandle;

/// Pluggable appearing/disappearing animation for a popup surface.
///
/// All methods take a [`ContentHandle`] to drive and a [`SurfaceContext`]
/// snapshot describing the surface at the moment the call was made. The two
/// transition methods return a [`Completion`] the sequencer blocks on; a
/// strategy may settle it synchronously for instant transitions or from a
/// worker thread for timed ones.
///
/// `prepare` and `dispose` bracket the surface's attached lifetime. They are
/// infallible: a strategy with nothing to stage simply inherits the default
/// no-ops.
pub trait AnimationStrategy: Send {
    /// Stage initial visual state before the surface first becomes visible.
    ///
    /// Called once, before any appearing transition. The default does
    /// nothing.
    fn prepare(&mut self, content: &ContentHandle, ctx: &SurfaceContext) {
        let _ = (content, ctx);
    }

    /// Run the appearing animation.
    ///
    /// The returned completion settles when the animation is done. The
    /// default settles immediately.
    fn appear(&mut self, content: &ContentHandle, ctx: &SurfaceContext) -> Completion {
        let _ = (content, ctx);
        Completion::ready()
    }

    /// Run the disappearing animation.
    ///
    /// The returned completion settles when the animation is done. The
    /// default settles immediately.
    fn disappear(&mut self, content: &ContentHandle, ctx: &SurfaceContext) -> Completion {
        let _ = (content, ctx);
        Completion::ready()
    }

    /// Release anything staged in [`prepare`](Self::prepare).
    ///
    /// Called once when the surface detaches. The default does nothing.
    fn dispose(&mut self, content: &ContentHandle, ctx: &SurfaceContext) {
        let _ = (content, ctx);
    }

    /// Short label for logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Removal capability a navigation container exposes to its surfaces.
///
/// `remove_surface` is a request, not a command: the returned completion
/// reports whether the removal ran, and a host may refuse (unknown id,
/// surface already dismissing) by failing it.
pub trait NavigationHost {
    /// Request that the identified surface be dismissed and detached.
    fn remove_surface(&mut self, id: SurfaceId) -> Completion;
}
