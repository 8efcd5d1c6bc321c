#![forbid(unsafe_code)]

//! The host handle surfaces enqueue removal requests through.
//!
//! A background tap cannot remove its own surface synchronously: the surface
//! is borrowed mutably while the tap is delivered, and removal runs a whole
//! disappearing transition. [`NavHandle`] decouples the two. It implements
//! [`NavigationHost`] by queueing a request and handing back a completion;
//! [`PopupStack::service_requests`](crate::PopupStack::service_requests)
//! drains the queue and settles each request with the real removal outcome.
//!
//! # Invariants
//!
//! - Clones share one queue; a request enqueued through any clone is visible
//!   to all of them
//! - Every queued request eventually settles its completion: with the
//!   removal outcome when serviced, or as abandoned if the queue is dropped
//!   first

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use scrim_core::{Completion, CompletionSource, NavigationHost, SurfaceId};

/// One queued removal, paired with the source that reports its outcome.
pub(crate) struct RemovalRequest {
    pub(crate) id: SurfaceId,
    pub(crate) source: CompletionSource,
}

/// Cloneable handle onto a stack's removal queue.
#[derive(Clone, Default)]
pub struct NavHandle {
    queue: Arc<Mutex<VecDeque<RemovalRequest>>>,
}

impl NavHandle {
    /// Create a handle with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of removal requests waiting to be serviced.
    pub fn pending(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Take every queued request, oldest first.
    pub(crate) fn drain(&self) -> Vec<RemovalRequest> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }
}

impl NavigationHost for NavHandle {
    fn remove_surface(&mut self, id: SurfaceId) -> Completion {
        let source = CompletionSource::new();
        let completion = source.completion();
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(RemovalRequest { id, source });
        tracing::debug!(target: "scrim.nav", surface_id = id.get(), "removal queued");
        completion
    }
}

impl fmt::Debug for NavHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHandle")
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}
