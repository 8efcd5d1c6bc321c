#![forbid(unsafe_code)]

//! Opacity-only strategy. The reduced-motion choice.

use scrim_core::{AnimationStrategy, Completion, ContentHandle, SurfaceContext, VisualState};

use crate::driver::animate;
use crate::easing::lerp;
use crate::timing::AnimationTiming;

/// Fades content in and out without moving or scaling it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FadeStrategy {
    timing: AnimationTiming,
}

impl FadeStrategy {
    /// Create the default fade strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timing configuration.
    pub fn timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }
}

impl AnimationStrategy for FadeStrategy {
    fn prepare(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) {
        content.set(VisualState::with_opacity(0.0));
    }

    fn appear(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        animate(
            self.timing.appear_duration,
            self.timing.appear_easing,
            move |p| {
                content.set(VisualState::with_opacity(lerp(0.0, 1.0, p)));
            },
        )
    }

    fn disappear(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        animate(
            self.timing.disappear_duration,
            self.timing.disappear_easing,
            move |p| {
                content.set(VisualState::with_opacity(lerp(1.0, 0.0, p)));
            },
        )
    }

    fn dispose(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) {
        content.reset();
    }

    fn name(&self) -> &str {
        "fade"
    }
}
