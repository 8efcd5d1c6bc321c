#![forbid(unsafe_code)]

//! Navigation: the popup stack and the removal request queue.
//!
//! # Role in Scrim
//! `scrim-nav` is the host side of the surface lifecycle. It owns presented
//! surfaces in z-order, drives their appearing and disappearing transitions,
//! and answers the removal requests surfaces make when the background is
//! tapped.
//!
//! # Primary responsibilities
//! - **Stack**: [`PopupStack`] presents, dismisses, and arranges surfaces.
//! - **Removal queue**: [`NavHandle`] implements
//!   [`scrim_core::NavigationHost`] by queueing requests, so a surface never
//!   removes itself from inside its own tap delivery.
//! - **Tap routing**: background taps go to the frontmost surface and the
//!   resulting removal is serviced before the call returns.
//!
//! # How it fits in the system
//! An embedder owns one [`PopupStack`] per screen. It calls
//! [`push`](PopupStack::push) and [`pop`](PopupStack::pop) in response to
//! app logic, [`handle_background_tap`](PopupStack::handle_background_tap)
//! from its input layer, and [`set_bounds`](PopupStack::set_bounds) when the
//! screen geometry changes.

pub mod error;
pub mod handle;
pub mod stack;

pub use error::StackError;
pub use handle::NavHandle;
pub use stack::{PopupStack, TapOutcome};
