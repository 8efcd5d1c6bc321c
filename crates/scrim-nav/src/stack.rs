#![forbid(unsafe_code)]

//! The popup stack: presentation order, dismissal, and tap routing.
//!
//! [`PopupStack`] owns every presented [`PopupSurface`] in z-order (last is
//! frontmost). Presenting arranges the surface into the stack's bounds, lets
//! the strategy stage its initial state, and runs the appearing transition;
//! dismissing runs the disappearing transition and detaches the surface.
//! Background taps go to the frontmost surface and come back through the
//! removal queue.
//!
//! # Example
//!
//! ```
//! use scrim_core::Bounds;
//! use scrim_nav::{PopupStack, TapOutcome};
//! use scrim_surface::{PopupSurface, SurfaceConfig};
//!
//! let mut stack = PopupStack::with_bounds(Bounds::new(0.0, 0.0, 400.0, 800.0));
//! stack.push(PopupSurface::new(SurfaceConfig::new().animated(false)))?;
//! assert_eq!(stack.depth(), 1);
//!
//! let outcome = stack.handle_background_tap()?;
//! assert!(matches!(outcome, TapOutcome::Dismissed { .. }));
//! assert!(stack.is_empty());
//! # Ok::<(), scrim_nav::StackError>(())
//! ```
//!
//! # Invariants
//!
//! - A surface is either fully on the stack or fully off it; transitions run
//!   while it is on
//! - A surface mid-dismissal refuses a second dismissal
//! - Removal requests settle their completion with the real outcome, in the
//!   order they were queued
//!
//! # Failure Modes
//!
//! - A failed appearing transition leaves the surface presented, so the
//!   caller can retry the transition or remove the surface
//! - A failed disappearing transition leaves the surface presented and no
//!   longer mid-dismissal, so dismissal can be retried

use std::fmt;

use scrim_core::{Bounds, SurfaceId};
use scrim_surface::{PopupSurface, TapResponse};
use web_time::Instant;

use crate::error::StackError;
use crate::handle::NavHandle;

// ============================================================================
// Tap Outcome
// ============================================================================

/// What a routed background tap did to the stack.
#[derive(Debug)]
pub enum TapOutcome {
    /// The frontmost surface chose to stay.
    Retained,
    /// The frontmost surface was dismissed. The completion carries the
    /// removal outcome.
    Dismissed {
        /// The dismissed surface.
        id: SurfaceId,
        /// Settles when the queued removal has been serviced.
        completion: scrim_core::Completion,
    },
}

// ============================================================================
// Popup Stack
// ============================================================================

/// Presented surfaces in z-order, frontmost last.
pub struct PopupStack {
    surfaces: Vec<PopupSurface>,
    bounds: Bounds,
    requests: NavHandle,
}

impl PopupStack {
    /// Create an empty stack with zero bounds.
    pub fn new() -> Self {
        Self::with_bounds(Bounds::default())
    }

    /// Create an empty stack covering the given bounds.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            surfaces: Vec::new(),
            bounds,
            requests: NavHandle::new(),
        }
    }

    // ── Inspection ──────────────────────────────────────────────────────

    /// Number of presented surfaces.
    #[inline]
    pub fn depth(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surface is presented.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Whether a surface with this id is presented.
    pub fn contains(&self, id: SurfaceId) -> bool {
        self.index_of(id).is_some()
    }

    /// Id of the frontmost surface.
    pub fn top_id(&self) -> Option<SurfaceId> {
        self.surfaces.last().map(PopupSurface::id)
    }

    /// Presented surface ids, back to front.
    pub fn ids(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.surfaces.iter().map(PopupSurface::id)
    }

    /// Borrow a presented surface.
    pub fn surface(&self, id: SurfaceId) -> Option<&PopupSurface> {
        self.index_of(id).map(|index| &self.surfaces[index])
    }

    /// Mutably borrow a presented surface.
    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut PopupSurface> {
        self.index_of(id).map(|index| &mut self.surfaces[index])
    }

    /// The stack's removal queue handle. Clones stay connected.
    pub fn nav_handle(&self) -> NavHandle {
        self.requests.clone()
    }

    // ── Bounds ──────────────────────────────────────────────────────────

    /// Bounds surfaces are arranged into.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Change the stack bounds and re-arrange every presented surface.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.arrange_all();
    }

    /// Re-arrange every presented surface into the current bounds.
    ///
    /// Call after mutating a presented surface's padding so its content box
    /// catches up.
    pub fn arrange_all(&mut self) {
        for surface in &mut self.surfaces {
            surface.arrange(self.bounds);
        }
    }

    // ── Presentation ────────────────────────────────────────────────────

    /// Present a surface: arrange it, stage its animation, and run its
    /// appearing transition. The surface becomes frontmost.
    ///
    /// On transition failure the surface stays presented so the caller can
    /// retry via [`surface_mut`](Self::surface_mut) or remove it.
    pub fn push(&mut self, mut surface: PopupSurface) -> Result<SurfaceId, StackError> {
        let id = surface.id();
        let started = Instant::now();
        let _span = tracing::debug_span!(
            target: "scrim.nav",
            "nav.push",
            surface_id = id.get(),
            duration_us = tracing::field::Empty,
        )
        .entered();

        surface.arrange(self.bounds);
        surface.prepare_animation();
        self.surfaces.push(surface);

        if let Some(surface) = self.surfaces.last_mut()
            && let Err(err) = surface.appearing()
        {
            tracing::warn!(
                target: "scrim.nav",
                surface_id = id.get(),
                error = %err,
                "present failed"
            );
            return Err(err.into());
        }

        let duration_us = started.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
        tracing::debug!(
            target: "scrim.nav",
            surface_id = id.get(),
            depth = self.surfaces.len(),
            duration_us,
            "surface presented"
        );
        Ok(id)
    }

    /// Dismiss a surface: run its disappearing transition, release its
    /// animation state, and detach it.
    ///
    /// On transition failure the surface stays presented and is no longer
    /// marked mid-dismissal.
    pub fn remove(&mut self, id: SurfaceId) -> Result<PopupSurface, StackError> {
        let Some(index) = self.index_of(id) else {
            return Err(StackError::NotFound(id));
        };
        if self.surfaces[index].is_being_dismissed() {
            return Err(StackError::AlreadyDismissing(id));
        }

        let started = Instant::now();
        let _span = tracing::debug_span!(
            target: "scrim.nav",
            "nav.remove",
            surface_id = id.get(),
            duration_us = tracing::field::Empty,
        )
        .entered();

        self.surfaces[index].set_being_dismissed(true);
        if let Err(err) = self.surfaces[index].disappearing() {
            self.surfaces[index].set_being_dismissed(false);
            tracing::warn!(
                target: "scrim.nav",
                surface_id = id.get(),
                error = %err,
                "dismiss failed"
            );
            return Err(err.into());
        }
        self.surfaces[index].dispose_animation();

        let mut surface = self.surfaces.remove(index);
        surface.set_being_dismissed(false);

        let duration_us = started.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
        tracing::debug!(
            target: "scrim.nav",
            surface_id = id.get(),
            depth = self.surfaces.len(),
            duration_us,
            "surface dismissed"
        );
        Ok(surface)
    }

    /// Dismiss the frontmost surface.
    pub fn pop(&mut self) -> Result<PopupSurface, StackError> {
        let id = self.top_id().ok_or(StackError::Empty)?;
        self.remove(id)
    }

    /// Dismiss every surface, frontmost first, and return how many were
    /// dismissed.
    ///
    /// Stops at the first failure; surfaces not yet dismissed stay
    /// presented.
    pub fn pop_all(&mut self) -> Result<usize, StackError> {
        let mut dismissed = 0;
        while !self.surfaces.is_empty() {
            self.pop()?;
            dismissed += 1;
        }
        Ok(dismissed)
    }

    // ── Background taps and the removal queue ───────────────────────────

    /// Route a background tap to the frontmost surface.
    ///
    /// The surface's subscribers are always notified. If its dismissal
    /// decision says to close, the queued removal is serviced before this
    /// returns and the outcome carries the settled completion.
    pub fn handle_background_tap(&mut self) -> Result<TapOutcome, StackError> {
        let mut host = self.requests.clone();
        let Some(surface) = self.surfaces.last_mut() else {
            return Err(StackError::Empty);
        };
        let id = surface.id();

        match surface.send_background_tap(&mut host) {
            TapResponse::Retained => Ok(TapOutcome::Retained),
            TapResponse::Dismissing(completion) => {
                self.service_requests();
                Ok(TapOutcome::Dismissed { id, completion })
            }
        }
    }

    /// Perform every queued removal request and settle its completion.
    ///
    /// Requests for surfaces that are gone or already mid-dismissal fail
    /// their completion with the error message. Returns the number of
    /// requests serviced.
    pub fn service_requests(&mut self) -> usize {
        let requests = self.requests.drain();
        let serviced = requests.len();
        for request in requests {
            match self.remove(request.id) {
                Ok(_) => request.source.finish(),
                Err(err) => request.source.fail(err.to_string()),
            }
        }
        serviced
    }

    fn index_of(&self, id: SurfaceId) -> Option<usize> {
        self.surfaces.iter().position(|surface| surface.id() == id)
    }
}

impl Default for PopupStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PopupStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupStack")
            .field("depth", &self.surfaces.len())
            .field("bounds", &self.bounds)
            .field("pending_requests", &self.requests.pending())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
