#![forbid(unsafe_code)]

//! Frame-stepping driver behind the built-in strategies.
//!
//! [`animate`] runs a timed animation on a worker thread: each frame it maps
//! wall-clock elapsed time through an easing curve and hands the eased
//! progress to a caller-supplied closure. The returned
//! [`Completion`](scrim_core::Completion) settles when the final frame has
//! run.
//!
//! # Invariants
//!
//! - The closure always receives a final frame at exactly 1.0
//! - Zero-duration animations run that final frame synchronously on the
//!   calling thread and return an already-settled completion
//! - A panicking closure abandons the completion rather than stranding the
//!   waiter

use std::thread;
use std::time::Duration;

use scrim_core::{Completion, CompletionSource};
use web_time::Instant;

use crate::easing::Easing;

/// Delay between animation frames, roughly 60 frames per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run `frame` with eased progress until `duration` elapses.
///
/// Progress passed to `frame` is `easing.apply(elapsed / duration)`; the
/// last call is always exactly `1.0`. Returns a completion that settles
/// after that last call.
pub fn animate<F>(duration: Duration, easing: Easing, mut frame: F) -> Completion
where
    F: FnMut(f64) + Send + 'static,
{
    if duration.is_zero() {
        frame(1.0);
        return Completion::ready();
    }

    let source = CompletionSource::new();
    let completion = source.completion();

    thread::spawn(move || {
        let start = Instant::now();
        loop {
            let elapsed = start.elapsed();
            if elapsed >= duration {
                break;
            }
            let t = elapsed.as_secs_f64() / duration.as_secs_f64();
            frame(easing.apply(t));
            thread::sleep(FRAME_INTERVAL.min(duration - elapsed));
        }
        frame(1.0);
        source.finish();
    });

    completion
}
