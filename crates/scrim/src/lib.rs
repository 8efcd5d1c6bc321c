#![forbid(unsafe_code)]

//! Scrim public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the member crates, unifies their errors
//! behind [`Error`], and offers a lightweight prelude plus a [`Presenter`]
//! that drives a whole popup stack through one type.

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use scrim_core::{
    AnimationStrategy, Bounds, Completion, CompletionError, CompletionSource, ContentHandle,
    Insets, NavigationHost, SurfaceContext, SurfaceId, VisualState,
};

// --- Animation re-exports --------------------------------------------------

pub use scrim_animations::{
    AnimationTiming, Easing, FadeStrategy, ScaleStrategy, SlideFrom, SlideStrategy,
};

// --- Surface re-exports ----------------------------------------------------

pub use scrim_surface::{
    DismissPolicy, HookError, HookStage, LifecycleHook, Notifier, PopupSurface, Subscription,
    SurfaceConfig, TapResponse, TransitionError, TransitionKind,
};

// --- Navigation re-exports -------------------------------------------------

pub use scrim_nav::{NavHandle, PopupStack, StackError, TapOutcome};

// --- Errors ----------------------------------------------------------------

pub use error::{Error, RecoveryAction, Result};

// --- Presenter facade ------------------------------------------------------

/// One-stop driver for a popup stack.
///
/// [`Presenter`] owns a [`PopupStack`] and exposes its operations behind the
/// facade's unified [`Error`], so embedders match one error type and ask it
/// for a [`RecoveryAction`]. Reach through [`stack_mut`](Self::stack_mut)
/// for anything not mirrored here.
///
/// # Example
///
/// ```
/// use scrim::{Bounds, PopupSurface, Presenter, SurfaceConfig, TapOutcome};
///
/// let mut presenter = Presenter::new(Bounds::new(0.0, 0.0, 400.0, 800.0));
/// presenter.present(PopupSurface::new(SurfaceConfig::new().animated(false)))?;
///
/// match presenter.background_tap()? {
///     TapOutcome::Dismissed { completion, .. } => completion.wait()?,
///     TapOutcome::Retained => {}
/// }
/// assert!(presenter.is_empty());
/// # Ok::<(), scrim::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Presenter {
    stack: PopupStack,
}

impl Presenter {
    /// Create a presenter whose popups are arranged into `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            stack: PopupStack::with_bounds(bounds),
        }
    }

    /// Number of presented surfaces.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether nothing is presented.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Present a surface on top of the stack.
    pub fn present(&mut self, surface: PopupSurface) -> Result<SurfaceId> {
        Ok(self.stack.push(surface)?)
    }

    /// Dismiss the surface with the given id and hand it back.
    pub fn dismiss(&mut self, id: SurfaceId) -> Result<PopupSurface> {
        Ok(self.stack.remove(id)?)
    }

    /// Dismiss the frontmost surface and hand it back.
    pub fn dismiss_top(&mut self) -> Result<PopupSurface> {
        Ok(self.stack.pop()?)
    }

    /// Dismiss every surface, frontmost first. Returns how many came down.
    pub fn dismiss_all(&mut self) -> Result<usize> {
        Ok(self.stack.pop_all()?)
    }

    /// Route a background tap to the frontmost surface.
    pub fn background_tap(&mut self) -> Result<TapOutcome> {
        Ok(self.stack.handle_background_tap()?)
    }

    /// Run removal requests queued through the stack's [`NavHandle`].
    pub fn service_requests(&mut self) -> usize {
        self.stack.service_requests()
    }

    /// Re-arrange every presented surface into new bounds.
    pub fn resize(&mut self, bounds: Bounds) {
        self.stack.set_bounds(bounds);
    }

    /// The underlying stack.
    pub fn stack(&self) -> &PopupStack {
        &self.stack
    }

    /// Mutable access to the underlying stack.
    pub fn stack_mut(&mut self) -> &mut PopupStack {
        &mut self.stack
    }
}

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnimationTiming, Bounds, Completion, Error, FadeStrategy, Insets, LifecycleHook,
        PopupStack, PopupSurface, Presenter, Result, ScaleStrategy, SlideStrategy, SurfaceConfig,
        SurfaceId, TapOutcome, TransitionKind,
    };

    pub use crate::{animations, core, nav, surface};
}

pub use scrim_animations as animations;
pub use scrim_core as core;
pub use scrim_nav as nav;
pub use scrim_surface as surface;
