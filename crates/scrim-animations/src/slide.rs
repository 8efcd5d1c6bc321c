#![forbid(unsafe_code)]

//! Slide-with-fade strategy.

use scrim_core::{AnimationStrategy, Completion, ContentHandle, SurfaceContext, VisualState};

use crate::driver::animate;
use crate::easing::lerp;
use crate::timing::AnimationTiming;

/// Edge the content slides in from (and back out towards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideFrom {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Slides content in from an edge while fading it in, and reverses on the
/// way out.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideStrategy {
    timing: AnimationTiming,
    from: SlideFrom,
    travel: f64,
}

impl Default for SlideStrategy {
    fn default() -> Self {
        Self {
            timing: AnimationTiming::default(),
            from: SlideFrom::Bottom,
            travel: 24.0,
        }
    }
}

impl SlideStrategy {
    /// Create the default slide strategy (from the bottom).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slide strategy from the given edge.
    pub fn from_edge(from: SlideFrom) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    /// Set the timing configuration.
    pub fn timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the slide distance. Capped at the relevant bounds dimension.
    pub fn travel(mut self, travel: f64) -> Self {
        self.travel = travel.max(0.0);
        self
    }

    /// Offset of the fully slid-out position for this surface.
    fn resting_offset(&self, ctx: &SurfaceContext) -> (f64, f64) {
        match self.from {
            SlideFrom::Top => (0.0, -self.travel.min(ctx.bounds.height)),
            SlideFrom::Bottom => (0.0, self.travel.min(ctx.bounds.height)),
            SlideFrom::Left => (-self.travel.min(ctx.bounds.width), 0.0),
            SlideFrom::Right => (self.travel.min(ctx.bounds.width), 0.0),
        }
    }
}

impl AnimationStrategy for SlideStrategy {
    fn prepare(&mut self, content: &ContentHandle, ctx: &SurfaceContext) {
        let (x, y) = self.resting_offset(ctx);
        content.set(VisualState {
            opacity: 0.0,
            offset_x: x,
            offset_y: y,
            ..VisualState::IDENTITY
        });
    }

    fn appear(&mut self, content: &ContentHandle, ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        let (x, y) = self.resting_offset(ctx);
        animate(
            self.timing.appear_duration,
            self.timing.appear_easing,
            move |p| {
                content.set(VisualState {
                    opacity: lerp(0.0, 1.0, p),
                    offset_x: lerp(x, 0.0, p),
                    offset_y: lerp(y, 0.0, p),
                    ..VisualState::IDENTITY
                });
            },
        )
    }

    fn disappear(&mut self, content: &ContentHandle, ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        let (x, y) = self.resting_offset(ctx);
        animate(
            self.timing.disappear_duration,
            self.timing.disappear_easing,
            move |p| {
                content.set(VisualState {
                    opacity: lerp(1.0, 0.0, p),
                    offset_x: lerp(0.0, x, p),
                    offset_y: lerp(0.0, y, p),
                    ..VisualState::IDENTITY
                });
            },
        )
    }

    fn dispose(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) {
        content.reset();
    }

    fn name(&self) -> &str {
        "slide"
    }
}
