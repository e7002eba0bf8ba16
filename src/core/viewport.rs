//! Viewport capability consumed by the navigation engine.
//!
//! The viewport is an external scrollable widget that keeps its own
//! selected position. The engine only pushes positions into it
//! (`scroll_to`), pulls them back (`selected_scroll_snap`) and listens for
//! `select` notifications. It never relies on how the widget animates.

use tokio::sync::mpsc;

/// Handle returned by [`Viewport::on_select`].
pub type SubscriptionId = u64;

/// Payload-free `select` notification. Receivers re-read
/// [`Viewport::selected_scroll_snap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectNotice;

/// Scrollable widget with a selected snap position.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Command the widget to scroll to `position`.
    fn scroll_to(&mut self, position: usize);

    /// The snap position the widget currently considers selected.
    fn selected_scroll_snap(&self) -> usize;

    /// Re-initialize after the slide set changed.
    fn set_slide_count(&mut self, count: usize);

    /// Register a `select` listener.
    fn on_select(&mut self, listener: mpsc::UnboundedSender<SelectNotice>) -> SubscriptionId;

    /// Deregister a listener added with [`Viewport::on_select`].
    fn off_select(&mut self, id: SubscriptionId);
}

/// An attached viewport plus its `select` subscription.
///
/// The subscription lives exactly as long as the link: dropping the link
/// deregisters the listener, so a torn-down engine never reacts to a stale
/// widget.
pub struct ViewportLink<V: Viewport> {
    viewport: V,
    subscription: SubscriptionId,
    notices: mpsc::UnboundedReceiver<SelectNotice>,
}

impl<V: Viewport> ViewportLink<V> {
    /// Subscribe to `viewport` and take ownership of it.
    pub fn attach(mut viewport: V) -> Self {
        let (tx, notices) = mpsc::unbounded_channel();
        let subscription = viewport.on_select(tx);
        tracing::debug!(subscription, "Viewport attached");
        Self {
            viewport,
            subscription,
            notices,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Drain pending notices. Returns `true` if at least one arrived.
    pub fn drain_notices(&mut self) -> bool {
        let mut received = false;
        while self.notices.try_recv().is_ok() {
            received = true;
        }
        received
    }

    /// Push `position` unless the widget already reports it.
    ///
    /// Returns `true` if a scroll was commanded.
    pub fn push(&mut self, position: usize) -> bool {
        if self.viewport.selected_scroll_snap() == position {
            return false;
        }
        self.viewport.scroll_to(position);
        true
    }
}

impl<V: Viewport> Drop for ViewportLink<V> {
    fn drop(&mut self) {
        self.viewport.off_select(self.subscription);
        tracing::debug!(subscription = self.subscription, "Viewport detached");
    }
}
