//! Navigation state machine over the live projection.
//!
//! The navigator is the single authority for the current index. The
//! attached viewport is treated as an I/O device: positions are pushed to
//! it when the index changes for any reason other than the viewport's own
//! report, and `select` notifications from it overwrite the index. Pushes
//! are suppressed when the viewport already shows the target, which keeps
//! the two sides from ping-ponging.

use rand::Rng;

use super::viewport::{Viewport, ViewportLink};

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Current position within a projection of `len` items.
pub struct Navigator<V: Viewport> {
    current_index: usize,
    len: usize,
    link: Option<ViewportLink<V>>,
}

impl<V: Viewport> Navigator<V> {
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
            link: None,
        }
    }

    /// Current index. Meaningless while the projection is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ── Viewport lifecycle ──────────────────────────────────────────────

    /// Attach a viewport, replacing (and unsubscribing) any previous one.
    ///
    /// The widget is re-initialized with the current slide count and
    /// brought to the current index.
    pub fn attach(&mut self, viewport: V) {
        self.link = None;
        let mut link = ViewportLink::attach(viewport);
        link.viewport_mut().set_slide_count(self.len);
        if self.len > 0 {
            link.push(self.current_index);
        }
        self.link = Some(link);
    }

    /// Detach the viewport, deregistering its listener.
    pub fn detach(&mut self) {
        self.link = None;
    }

    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.link.as_ref().map(ViewportLink::viewport)
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.link.as_mut().map(ViewportLink::viewport_mut)
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Move to `target`, wrapping modulo the projection length.
    ///
    /// No-op on an empty projection. Returns `true` if the index changed.
    pub fn go_to(&mut self, target: isize) -> bool {
        if self.len == 0 {
            return false;
        }
        let wrapped = target.rem_euclid(self.len as isize) as usize;
        let changed = wrapped != self.current_index;
        self.current_index = wrapped;
        self.push_current();
        changed
    }

    /// Step one item forward or back, wrapping at either end.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.go_to(self.current_index as isize + direction.delta())
    }

    /// Jump to a uniformly random item.
    ///
    /// When the projection holds more than one item and the draw lands on
    /// the current index, the next index is taken instead so the move is
    /// always visible. With a single item the draw may repeat.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.len == 0 {
            return false;
        }
        let draw = rng.gen_range(0..self.len);
        let target = if draw == self.current_index && self.len > 1 {
            (draw + 1) % self.len
        } else {
            draw
        };
        tracing::debug!(draw, target, "Shuffle");
        self.go_to(target as isize)
    }

    /// Replace the projection: new length, index back to 0.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current_index = 0;
        if let Some(link) = self.link.as_mut() {
            link.viewport_mut().set_slide_count(len);
            if len > 0 {
                link.push(0);
            }
        }
    }

    /// Read back viewport-originated movement.
    ///
    /// Drains pending `select` notices and, if any arrived, overwrites the
    /// index with the viewport's selected snap. Nothing is pushed back.
    /// Returns `true` if the index changed.
    pub fn sync_from_viewport(&mut self) -> bool {
        let Some(link) = self.link.as_mut() else {
            return false;
        };
        if !link.drain_notices() || self.len == 0 {
            return false;
        }

        let snap = link.viewport().selected_scroll_snap();
        if snap >= self.len {
            tracing::warn!(snap, len = self.len, "Viewport reported snap outside projection");
            return false;
        }
        if snap == self.current_index {
            return false;
        }
        tracing::debug!(from = self.current_index, to = snap, "Viewport select");
        self.current_index = snap;
        true
    }

    fn push_current(&mut self) {
        let index = self.current_index;
        if let Some(link) = self.link.as_mut() {
            link.push(index);
        }
    }
}
