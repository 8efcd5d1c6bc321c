#![forbid(unsafe_code)]

//! Core: geometry, completion signals, visual state, and capability contracts.
//!
//! # Role in Scrim
//! `scrim-core` is the foundation layer. It owns the value types every other
//! crate speaks in and the two traits that decouple surfaces from their
//! animations and their host.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Bounds`] and [`Insets`] with exact, unclamped inset
//!   arithmetic.
//! - **Completion signals**: [`CompletionSource`]/[`Completion`], the
//!   single-shot handshake suspend-until-done operations settle through.
//! - **Visual state**: [`VisualState`] and the shared [`ContentHandle`]
//!   animation strategies drive.
//! - **Capabilities**: [`AnimationStrategy`] and [`NavigationHost`], the
//!   seams surfaces plug into.
//!
//! # How it fits in the system
//! `scrim-surface` sequences transitions over these signals, `scrim-animations`
//! implements [`AnimationStrategy`] on top of [`ContentHandle`], and
//! `scrim-nav` implements [`NavigationHost`] for its popup stack. Nothing in
//! this crate knows about any of them.

pub mod capability;
pub mod context;
pub mod geometry;
pub mod signal;
pub mod visual;

pub use capability::{AnimationStrategy, NavigationHost};
pub use context::{SurfaceContext, SurfaceId};
pub use geometry::{Bounds, Insets};
pub use signal::{Completion, CompletionError, CompletionSource};
pub use visual::{ContentHandle, VisualState};
