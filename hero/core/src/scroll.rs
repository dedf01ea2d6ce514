//! Scoped access to the host's global scroll signal.
//!
//! A [`ScrollSubscription`] owns the listener it registered; dropping the
//! subscription deregisters it, so a torn-down hero never reacts to scrolling.

use tracing::debug;

/// A source of scroll notifications.
pub trait ScrollTarget {
    /// Registration handle. Dropping it must deregister the handler.
    type Listener;

    fn listen(&self, handler: Box<dyn FnMut()>) -> Self::Listener;
}

/// Holds at most one scroll listener for the lifetime of a mounted hero.
#[derive(Debug)]
pub struct ScrollSubscription<L> {
    listener: Option<L>,
}

impl<L> Default for ScrollSubscription<L> {
    fn default() -> Self {
        ScrollSubscription { listener: None }
    }
}

impl<L> ScrollSubscription<L> {
    pub fn attach<T, F>(target: &T, handler: F) -> Self
    where
        T: ScrollTarget<Listener = L>,
        F: FnMut() + 'static,
    {
        debug!("Attaching scroll listener");
        ScrollSubscription {
            listener: Some(target.listen(Box::new(handler))),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Releases the listener. Safe to call more than once.
    pub fn detach(&mut self) {
        if self.listener.take().is_some() {
            debug!("Detached scroll listener");
        }
    }
}

impl<L> Drop for ScrollSubscription<L> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Collapses bursts of scroll events into one update per animation frame.
///
/// Only the latest offset is kept; the parallax formula is applied to it
/// unchanged.
#[derive(Debug, Default)]
pub struct ScrollCoalescer {
    pending: Option<f64>,
    frame_requested: bool,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll offset. Returns `true` when the caller has to schedule
    /// a frame to flush it.
    pub fn push(&mut self, scroll_y: f64) -> bool {
        self.pending = Some(scroll_y);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Takes the latest offset at frame time.
    pub fn take(&mut self) -> Option<f64> {
        self.frame_requested = false;
        self.pending.take()
    }
}
