#![forbid(unsafe_code)]

//! Subscriber list for surface events.
//!
//! [`Notifier`] fans an event payload out to registered callbacks.
//! Callbacks are held as weak references; the strong reference lives inside
//! the [`Subscription`] guard handed back to the subscriber, so dropping the
//! guard unsubscribes. Dead entries are pruned lazily during `emit`.
//!
//! # Invariants
//!
//! 1. Callbacks fire in registration order.
//! 2. A dropped subscription never fires again, though its dead entry may
//!    linger in the list until the next `emit` prunes it.
//! 3. The subscriber list lock is released before callbacks run, so a
//!    callback may touch the surface that owns the notifier.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// A subscriber callback stored as a strong `Arc` inside its subscription,
/// handed to the notifier as `Weak`.
type CallbackArc<T> = Arc<dyn Fn(&T) + Send + Sync>;
type CallbackWeak<T> = Weak<dyn Fn(&T) + Send + Sync>;

/// Fan-out event channel with weak-referenced subscribers.
pub struct Notifier<T> {
    subscribers: Mutex<Vec<CallbackWeak<T>>>,
}

impl<T: 'static> Notifier<T> {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a callback for future emissions.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard unsubscribes
    /// the callback.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let strong: CallbackArc<T> = Arc::new(callback);
        let weak = Arc::downgrade(&strong);
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(weak);
        // Wrap in a box so the `Arc<dyn Fn(&T)>` can be type-erased; it
        // cannot coerce to `Arc<dyn Any>` directly.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of currently registered subscribers (including dead ones
    /// not yet pruned).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Deliver `payload` to live subscribers and prune dead ones.
    pub fn emit(&self, payload: &T) {
        // Collect live callbacks first so the lock is not held during calls.
        let callbacks: Vec<CallbackArc<T>> = {
            let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
            subscribers.retain(|w| w.strong_count() > 0);
            subscribers.iter().filter_map(|w| w.upgrade()).collect()
        };

        for callback in callbacks {
            callback(payload);
        }
    }
}

impl<T: 'static> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len();
        f.debug_struct("Notifier")
            .field("subscribers", &count)
            .finish()
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` drops the strong reference to the callback,
/// so the `Weak` in the notifier's list fails to upgrade on the next
/// emission.
pub struct Subscription {
    _guard: Box<dyn Any + Send + Sync>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
