//! Host events and the control's listener registry.
//!
//! The host forwards every raw [`MapEvent`] to the controller. Which handlers
//! run is decided here: each event kind has an ordered list of subscriptions,
//! either persistent (`on`) or one-shot (`once`). Listeners are plain tags the
//! controller matches on, so the registry owns no callbacks.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::view::Point;

/// A notification delivered by the host map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// A view transition (pan, zoom, fit) has settled.
    MoveEnd,
    /// The primary pointer went down at a screen position.
    PointerDown(Point),
}

impl MapEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MoveEnd => EventKind::MoveEnd,
            Self::PointerDown(_) => EventKind::PointerDown,
        }
    }
}

/// Event name used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MoveEnd,
    PointerDown,
}

/// Handlers the controller can subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Record the host's current view into history.
    RecordView,
    /// Swallow one settle, then re-subscribe [`Listener::RecordView`].
    ResumeRecording,
    /// Hand a pointer-down to the host's box-zoom gesture.
    BoxZoomStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subscription {
    kind: EventKind,
    listener: Listener,
    once: bool,
}

/// Ordered subscriptions across all event kinds.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to every `kind` event. Subscribing twice is a no-op.
    pub fn on(&mut self, kind: EventKind, listener: Listener) {
        if self.has_persistent(kind, listener) {
            return;
        }
        self.subscriptions.push(Subscription { kind, listener, once: false });
    }

    /// Subscribe `listener` to the next `kind` event only.
    ///
    /// Repeated one-shot subscriptions of the same listener queue up: each
    /// one consumes a separate event.
    pub fn once(&mut self, kind: EventKind, listener: Listener) {
        self.subscriptions.push(Subscription { kind, listener, once: true });
    }

    /// Remove the persistent subscription of `listener`, if any.
    pub fn off(&mut self, kind: EventKind, listener: Listener) {
        self.subscriptions
            .retain(|s| !(s.kind == kind && s.listener == listener && !s.once));
    }

    /// Withdraw the oldest pending one-shot subscription of `listener`.
    ///
    /// Returns whether one was pending.
    pub fn cancel_once(&mut self, kind: EventKind, listener: Listener) -> bool {
        let found = self
            .subscriptions
            .iter()
            .position(|s| s.kind == kind && s.listener == listener && s.once);
        match found {
            Some(index) => {
                self.subscriptions.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_persistent(&self, kind: EventKind, listener: Listener) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.kind == kind && s.listener == listener && !s.once)
    }

    #[must_use]
    pub fn has_once(&self, kind: EventKind, listener: Listener) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.kind == kind && s.listener == listener && s.once)
    }

    /// Listeners to run for one `kind` event, in subscription order.
    ///
    /// Persistent subscriptions stay registered. For each distinct one-shot
    /// listener the oldest subscription fires and is removed; later duplicates
    /// wait for the next event. Subscriptions added while the caller runs the
    /// returned listeners only see later events.
    pub fn dispatch(&mut self, kind: EventKind) -> Vec<Listener> {
        let mut fired = Vec::new();
        let mut consumed: Vec<Listener> = Vec::new();
        self.subscriptions.retain(|s| {
            if s.kind != kind {
                return true;
            }
            if !s.once {
                fired.push(s.listener);
                return true;
            }
            if consumed.contains(&s.listener) {
                return true;
            }
            consumed.push(s.listener);
            fired.push(s.listener);
            false
        });
        fired
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Number of subscriptions for `kind`, persistent and one-shot.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }
}
