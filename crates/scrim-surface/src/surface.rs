#![forbid(unsafe_code)]

//! Popup surface lifecycle: transitions, layout, and background-tap
//! dismissal.
//!
//! A [`PopupSurface`] is one presented popup. It owns the ordered
//! [`LifecycleHook`] list, the optional animation strategy, the padding-aware
//! layout state, and the background-tap machinery. The host container (see
//! `scrim-nav`) assigns bounds and drives the transitions; everything between
//! those calls is sequenced here.
//!
//! # Example
//!
//! ```
//! use scrim_core::{Bounds, Insets};
//! use scrim_surface::{PopupSurface, SurfaceConfig};
//!
//! let mut surface = PopupSurface::new(
//!     SurfaceConfig::new()
//!         .animated(false)
//!         .system_padding(Insets::vertical(20.0)),
//! );
//! surface.arrange(Bounds::new(0.0, 0.0, 400.0, 800.0));
//! assert_eq!(surface.content_bounds().height, 760.0);
//!
//! surface.appearing()?;
//! # Ok::<(), scrim_surface::TransitionError>(())
//! ```
//!
//! # Invariants
//!
//! - A transition runs its begin hooks, then the animation (if eligible),
//!   then its end hooks; the hook stages run exactly once whether or not the
//!   animation ran
//! - Animation eligibility is read after the begin hooks, so a begin hook can
//!   still flip it for the current transition
//! - At most one transition runs at a time; a hook re-entering the surface
//!   gets an error, never a deadlock
//! - The content box always equals the stored bounds inset by the system
//!   padding (when enabled), with no clamping
//!
//! # Failure Modes
//!
//! - A hook failure stops the transition; later hooks and stages do not run
//! - A failed transition leaves the surface idle, so the caller may retry
//! - A strategy that never settles its completion stalls the transition;
//!   strategies own their timeliness

use std::fmt;
use std::mem;

use scrim_animations::ScaleStrategy;
use scrim_core::{
    AnimationStrategy, Bounds, Completion, ContentHandle, Insets, NavigationHost, SurfaceContext,
    SurfaceId,
};
use web_time::Instant;

use crate::error::TransitionError;
use crate::hooks::{HookStage, LifecycleHook};
use crate::notifier::{Notifier, Subscription};

// ============================================================================
// Transition Kind
// ============================================================================

/// Which direction a transition moves the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// The surface is becoming visible.
    Appearing,
    /// The surface is going away.
    Disappearing,
}

impl TransitionKind {
    /// Short label for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Appearing => "appearing",
            Self::Disappearing => "disappearing",
        }
    }
}

// ============================================================================
// Background Tap Outcome
// ============================================================================

/// What a background tap did to the surface.
#[derive(Debug)]
pub enum TapResponse {
    /// The surface chose to stay presented.
    Retained,
    /// Removal was requested from the host; the completion reports its
    /// outcome.
    Dismissing(Completion),
}

impl TapResponse {
    /// Whether the tap led to a removal request.
    pub fn is_dismissing(&self) -> bool {
        matches!(self, Self::Dismissing(_))
    }
}

/// Decision callback consulted when the background is tapped.
///
/// Installed via [`PopupSurface::set_dismiss_policy`]; overrides the
/// `close_on_background_tap` flag while present.
pub type DismissPolicy = Box<dyn Fn(&SurfaceContext) -> bool + Send>;

// ============================================================================
// Surface Configuration
// ============================================================================

/// Initial settings for a [`PopupSurface`].
///
/// Everything here can also be changed later through the surface's setters;
/// the config exists so a surface is fully described before it is presented.
/// The default carries the built-in scale strategy;
/// [`without_animation`](Self::without_animation) drops it.
pub struct SurfaceConfig {
    animated: bool,
    close_on_background_tap: bool,
    has_system_padding: bool,
    system_padding: Insets,
    animation: Option<Box<dyn AnimationStrategy>>,
    hooks: Vec<Box<dyn LifecycleHook>>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            animated: true,
            close_on_background_tap: true,
            has_system_padding: true,
            system_padding: Insets::ZERO,
            animation: Some(Box::new(ScaleStrategy::new())),
            hooks: Vec::new(),
        }
    }
}

impl SurfaceConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether transitions run their animation step.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Set the default background-tap dismissal answer.
    pub fn close_on_background_tap(mut self, close: bool) -> Self {
        self.close_on_background_tap = close;
        self
    }

    /// Set whether system padding participates in layout.
    pub fn has_system_padding(mut self, has: bool) -> Self {
        self.has_system_padding = has;
        self
    }

    /// Set the padding reserved for system chrome.
    pub fn system_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.system_padding = padding.into();
        self
    }

    /// Set the animation strategy, replacing the default scale strategy.
    pub fn animation(mut self, strategy: impl AnimationStrategy + 'static) -> Self {
        self.animation = Some(Box::new(strategy));
        self
    }

    /// Drop the strategy entirely; transitions run hooks only.
    pub fn without_animation(mut self) -> Self {
        self.animation = None;
        self
    }

    /// Append a lifecycle hook. Hooks run in the order they were added.
    pub fn hook(mut self, hook: impl LifecycleHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }
}

impl fmt::Debug for SurfaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceConfig")
            .field("animated", &self.animated)
            .field("close_on_background_tap", &self.close_on_background_tap)
            .field("has_system_padding", &self.has_system_padding)
            .field("system_padding", &self.system_padding)
            .field(
                "animation",
                &self.animation.as_deref().map(AnimationStrategy::name),
            )
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

// ============================================================================
// Popup Surface
// ============================================================================

/// One presented popup and all of its lifecycle state.
pub struct PopupSurface {
    id: SurfaceId,
    content: ContentHandle,
    bounds: Bounds,
    content_bounds: Bounds,
    system_padding: Insets,
    has_system_padding: bool,
    is_animating: bool,
    close_on_background_tap: bool,
    is_being_dismissed: bool,
    needs_layout: bool,
    layout_revision: u64,
    active_transition: Option<TransitionKind>,
    animation: Option<Box<dyn AnimationStrategy>>,
    hooks: Vec<Box<dyn LifecycleHook>>,
    dismiss_policy: Option<DismissPolicy>,
    background_tap: Notifier<SurfaceId>,
}

impl PopupSurface {
    /// Create a surface from a configuration.
    pub fn new(config: SurfaceConfig) -> Self {
        let mut surface = Self {
            id: SurfaceId::next(),
            content: ContentHandle::new(),
            bounds: Bounds::default(),
            content_bounds: Bounds::default(),
            system_padding: config.system_padding,
            has_system_padding: config.has_system_padding,
            is_animating: config.animated,
            close_on_background_tap: config.close_on_background_tap,
            is_being_dismissed: false,
            needs_layout: true,
            layout_revision: 0,
            active_transition: None,
            animation: config.animation,
            hooks: config.hooks,
            dismiss_policy: None,
            background_tap: Notifier::new(),
        };
        surface.recompute_content_bounds();
        surface
    }

    /// Create a surface with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SurfaceConfig::default())
    }

    // ── Identity and configuration ──────────────────────────────────────

    /// This surface's process-unique id.
    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Handle to the animatable visual state.
    pub fn content(&self) -> &ContentHandle {
        &self.content
    }

    /// Whether transitions run their animation step.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Enable or disable the animation step for future (and, from a begin
    /// hook, the current) transition.
    pub fn set_is_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    /// Default background-tap dismissal answer.
    #[inline]
    pub fn close_on_background_tap(&self) -> bool {
        self.close_on_background_tap
    }

    /// Set the default background-tap dismissal answer.
    pub fn set_close_on_background_tap(&mut self, close: bool) {
        self.close_on_background_tap = close;
    }

    /// Whether a disappearing transition has been started by a host.
    #[inline]
    pub fn is_being_dismissed(&self) -> bool {
        self.is_being_dismissed
    }

    /// Mark the surface as mid-dismissal. Hosts flip this around the
    /// disappearing transition to keep duplicate removals out.
    pub fn set_being_dismissed(&mut self, dismissing: bool) {
        self.is_being_dismissed = dismissing;
    }

    /// Whether an animation strategy is attached.
    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    /// The attached strategy's log label, if any.
    pub fn animation_name(&self) -> Option<&str> {
        self.animation.as_deref().map(AnimationStrategy::name)
    }

    /// Attach an animation strategy, replacing any previous one.
    pub fn set_animation(&mut self, strategy: impl AnimationStrategy + 'static) {
        self.animation = Some(Box::new(strategy));
    }

    /// Detach the animation strategy.
    pub fn clear_animation(&mut self) {
        self.animation = None;
    }

    /// Append a lifecycle hook. Hooks run in the order they were added; a
    /// hook added during a transition joins from the next stage on.
    pub fn add_hook(&mut self, hook: impl LifecycleHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered lifecycle hooks.
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// The transition currently running, if any.
    pub fn active_transition(&self) -> Option<TransitionKind> {
        self.active_transition
    }

    /// Point-in-time snapshot of the surface's observable state.
    pub fn context(&self) -> SurfaceContext {
        SurfaceContext {
            id: self.id,
            bounds: self.bounds,
            content_bounds: self.content_bounds,
            system_padding: self.system_padding,
            has_system_padding: self.has_system_padding,
            is_animating: self.is_animating,
            close_on_background_tap: self.close_on_background_tap,
            is_being_dismissed: self.is_being_dismissed,
        }
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Outer box assigned by the host.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Inner box the content occupies after padding.
    #[inline]
    pub fn content_bounds(&self) -> Bounds {
        self.content_bounds
    }

    /// Padding reserved for system chrome.
    #[inline]
    pub fn system_padding(&self) -> Insets {
        self.system_padding
    }

    /// Whether system padding participates in layout.
    #[inline]
    pub fn has_system_padding(&self) -> bool {
        self.has_system_padding
    }

    /// Whether a layout pass is pending.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Counter bumped by every layout invalidation.
    #[inline]
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    /// Assign the outer box, recompute the content box from it, and return
    /// the content box.
    ///
    /// When system padding is enabled the content box is the bounds inset by
    /// the padding, with no clamping: oversized padding produces a content
    /// box with negative dimensions.
    pub fn arrange(&mut self, bounds: Bounds) -> Bounds {
        self.bounds = bounds;
        self.recompute_content_bounds();
        self.needs_layout = false;
        self.content_bounds
    }

    /// Store new system padding.
    ///
    /// The value is always stored. Layout is invalidated only when the new
    /// padding differs structurally from the old one (exact per-field
    /// comparison) and `force_layout` is set.
    pub fn set_system_padding(&mut self, padding: impl Into<Insets>, force_layout: bool) {
        let padding = padding.into();
        let changed = padding != self.system_padding;
        self.system_padding = padding;
        if changed && force_layout {
            self.invalidate_layout();
        }
    }

    /// Enable or disable the padding step. Invalidates layout on change.
    pub fn set_has_system_padding(&mut self, has: bool) {
        if self.has_system_padding != has {
            self.has_system_padding = has;
            self.invalidate_layout();
        }
    }

    /// Mark layout dirty and refresh the content box from the stored state.
    pub fn invalidate_layout(&mut self) {
        self.layout_revision = self.layout_revision.wrapping_add(1);
        self.needs_layout = true;
        self.recompute_content_bounds();
    }

    fn recompute_content_bounds(&mut self) {
        self.content_bounds = if self.has_system_padding {
            self.bounds.inset(self.system_padding)
        } else {
            self.bounds
        };
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Run the appearing transition to completion.
    ///
    /// Sequence: sync begin hooks, async begin hooks, the animation
    /// strategy's `appear` (when animation is enabled and a strategy is
    /// attached), sync end hooks, async end hooks. The hook stages run
    /// whether or not the animation did.
    pub fn appearing(&mut self) -> Result<(), TransitionError> {
        self.transition(TransitionKind::Appearing)
    }

    /// Run the disappearing transition to completion.
    ///
    /// Mirrors [`appearing`](Self::appearing) with the strategy's
    /// `disappear`.
    pub fn disappearing(&mut self) -> Result<(), TransitionError> {
        self.transition(TransitionKind::Disappearing)
    }

    /// Let the strategy stage initial visual state.
    ///
    /// No-op when animation is disabled or no strategy is set, like the
    /// animation step of a transition.
    pub fn prepare_animation(&mut self) {
        if !self.is_animating {
            return;
        }
        let ctx = self.context();
        let content = self.content.clone();
        if let Some(animation) = self.animation.as_mut() {
            animation.prepare(&content, &ctx);
        }
    }

    /// Let the strategy release staged state.
    ///
    /// No-op under the same conditions as
    /// [`prepare_animation`](Self::prepare_animation).
    pub fn dispose_animation(&mut self) {
        if !self.is_animating {
            return;
        }
        let ctx = self.context();
        let content = self.content.clone();
        if let Some(animation) = self.animation.as_mut() {
            animation.dispose(&content, &ctx);
        }
    }

    fn transition(&mut self, kind: TransitionKind) -> Result<(), TransitionError> {
        if let Some(active) = self.active_transition {
            return Err(TransitionError::AlreadyRunning { active });
        }
        self.active_transition = Some(kind);
        let result = self.run_transition(kind);
        self.active_transition = None;

        if let Err(err) = &result {
            tracing::warn!(
                target: "scrim.surface",
                surface_id = self.id.get(),
                kind = kind.label(),
                error = %err,
                "transition failed"
            );
        }
        result
    }

    fn run_transition(&mut self, kind: TransitionKind) -> Result<(), TransitionError> {
        let started = Instant::now();
        let _span = tracing::debug_span!(
            target: "scrim.surface",
            "surface.transition",
            surface_id = self.id.get(),
            kind = kind.label(),
            animated = self.is_animating,
            duration_us = tracing::field::Empty,
        )
        .entered();

        let (begin_sync, begin_async, end_sync, end_async) = match kind {
            TransitionKind::Appearing => (
                HookStage::AppearingBeginSync,
                HookStage::AppearingBeginAsync,
                HookStage::AppearingEndSync,
                HookStage::AppearingEndAsync,
            ),
            TransitionKind::Disappearing => (
                HookStage::DisappearingBeginSync,
                HookStage::DisappearingBeginAsync,
                HookStage::DisappearingEndSync,
                HookStage::DisappearingEndAsync,
            ),
        };

        self.run_hook_stage(begin_sync)?;
        self.run_hook_stage(begin_async)?;

        // Eligibility is read here, after the begin hooks, so a begin hook
        // can still flip it for this transition.
        if self.is_animating && self.animation.is_some() {
            let ctx = self.context();
            let content = self.content.clone();
            if let Some(animation) = self.animation.as_mut() {
                let completion = match kind {
                    TransitionKind::Appearing => animation.appear(&content, &ctx),
                    TransitionKind::Disappearing => animation.disappear(&content, &ctx),
                };
                completion.wait().map_err(TransitionError::Strategy)?;
            }
        }

        self.run_hook_stage(end_sync)?;
        self.run_hook_stage(end_async)?;

        let duration_us = started.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
        tracing::debug!(
            target: "scrim.surface",
            surface_id = self.id.get(),
            kind = kind.label(),
            duration_us,
            "transition complete"
        );
        Ok(())
    }

    fn run_hook_stage(&mut self, stage: HookStage) -> Result<(), TransitionError> {
        // Detach the list so each hook can borrow the surface mutably.
        // Hooks added during the stage land in `self.hooks` and are appended
        // behind the existing entries afterwards.
        let mut hooks = mem::take(&mut self.hooks);
        let mut outcome = Ok(());
        for hook in hooks.iter_mut() {
            let result = match stage {
                HookStage::AppearingBeginSync => {
                    hook.on_appearing_begin(self).map_err(|e| e.to_string())
                }
                HookStage::AppearingBeginAsync => hook
                    .appearing_begin_async(self)
                    .wait()
                    .map_err(|e| e.to_string()),
                HookStage::AppearingEndSync => {
                    hook.on_appearing_end(self).map_err(|e| e.to_string())
                }
                HookStage::AppearingEndAsync => hook
                    .appearing_end_async(self)
                    .wait()
                    .map_err(|e| e.to_string()),
                HookStage::DisappearingBeginSync => {
                    hook.on_disappearing_begin(self).map_err(|e| e.to_string())
                }
                HookStage::DisappearingBeginAsync => hook
                    .disappearing_begin_async(self)
                    .wait()
                    .map_err(|e| e.to_string()),
                HookStage::DisappearingEndSync => {
                    hook.on_disappearing_end(self).map_err(|e| e.to_string())
                }
                HookStage::DisappearingEndAsync => hook
                    .disappearing_end_async(self)
                    .wait()
                    .map_err(|e| e.to_string()),
            };
            if let Err(message) = result {
                outcome = Err(TransitionError::Hook { stage, message });
                break;
            }
        }
        hooks.append(&mut self.hooks);
        self.hooks = hooks;
        outcome
    }

    // ── Background tap ──────────────────────────────────────────────────

    /// Subscribe to background-tap notifications.
    ///
    /// The callback fires on every tap, before and regardless of the
    /// dismissal decision.
    pub fn on_background_tap(
        &self,
        callback: impl Fn(&SurfaceId) + Send + Sync + 'static,
    ) -> Subscription {
        self.background_tap.subscribe(callback)
    }

    /// Install a dismissal decision, overriding `close_on_background_tap`.
    pub fn set_dismiss_policy(
        &mut self,
        policy: impl Fn(&SurfaceContext) -> bool + Send + 'static,
    ) {
        self.dismiss_policy = Some(Box::new(policy));
    }

    /// Remove the dismissal decision; the flag answers again.
    pub fn clear_dismiss_policy(&mut self) {
        self.dismiss_policy = None;
    }

    /// Whether a background tap should dismiss the surface right now.
    ///
    /// Consults the installed policy if there is one, otherwise the
    /// `close_on_background_tap` flag.
    pub fn background_tap_decision(&self) -> bool {
        match &self.dismiss_policy {
            Some(policy) => policy(&self.context()),
            None => self.close_on_background_tap,
        }
    }

    /// Deliver a background tap.
    ///
    /// Always notifies subscribers first. Then, if the dismissal decision
    /// says so and the surface is not already mid-dismissal, requests
    /// removal from `host` and hands back the host's completion; the tap
    /// itself never blocks on the removal.
    pub fn send_background_tap(&mut self, host: &mut dyn NavigationHost) -> TapResponse {
        self.background_tap.emit(&self.id);

        let dismiss = self.background_tap_decision() && !self.is_being_dismissed;
        tracing::debug!(
            target: "scrim.surface",
            surface_id = self.id.get(),
            dismiss,
            "background tap"
        );
        if !dismiss {
            return TapResponse::Retained;
        }
        TapResponse::Dismissing(host.remove_surface(self.id))
    }
}

impl fmt::Debug for PopupSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupSurface")
            .field("id", &self.id)
            .field("bounds", &self.bounds)
            .field("content_bounds", &self.content_bounds)
            .field("system_padding", &self.system_padding)
            .field("has_system_padding", &self.has_system_padding)
            .field("is_animating", &self.is_animating)
            .field("close_on_background_tap", &self.close_on_background_tap)
            .field("is_being_dismissed", &self.is_being_dismissed)
            .field("animation", &self.animation_name())
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
