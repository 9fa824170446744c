//! Event Bus - explicit event dispatch
//!
//! A process-scoped bus the host constructs and hands to whoever needs
//! it. Nothing here is global: subscription state lives in the bus value
//! (cheaply cloneable handle), and subscribers get a cleanup closure
//! back, not an observer token in some default notification center.
//!
//! Dispatch is a consume chain: handlers run in subscription order and
//! the first one returning `true` stops propagation. [`EventBus::publish`]
//! reports that flag to the caller; the return-key path uses it to tell
//! the host "handled, do not insert a newline".
//!
//! # Example
//!
//! ```ignore
//! use formscroll::bus::EventBus;
//! use formscroll::events::UiEvent;
//!
//! let bus = EventBus::new();
//! let cleanup = bus.subscribe(|event| {
//!     println!("event: {event:?}");
//!     false // Don't consume
//! });
//!
//! bus.publish(UiEvent::BackgroundTap);
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::events::{RawNotification, UiEvent};

// =============================================================================
// TYPES
// =============================================================================

/// Handler for UI events. Return true to consume the event.
pub type EventHandler = Rc<dyn Fn(&UiEvent) -> bool>;

struct BusInner {
    handlers: Vec<(usize, EventHandler)>,
    next_id: usize,
}

impl BusInner {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// EVENT BUS
// =============================================================================

/// Single-threaded event bus with consume-chain dispatch.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                handlers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe to all events.
    /// Return true from the handler to consume the event.
    /// Returns a cleanup function that unsubscribes.
    pub fn subscribe<F>(&self, handler: F) -> Box<dyn FnOnce()>
    where
        F: Fn(&UiEvent) -> bool + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.handlers.push((id, Rc::new(handler)));
            id
        };

        let inner = self.inner.clone();
        Box::new(move || {
            inner
                .borrow_mut()
                .handlers
                .retain(|(handler_id, _)| *handler_id != id);
        })
    }

    /// Dispatch an event to subscribers in order.
    /// Returns true if any handler consumed it.
    ///
    /// Handlers run against a snapshot, with the registry not borrowed,
    /// so a handler may publish or unsubscribe re-entrantly.
    pub fn publish(&self, event: UiEvent) -> bool {
        let snapshot: Vec<EventHandler> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in snapshot {
            if handler(&event) {
                return true;
            }
        }
        false
    }

    /// Validate a raw keyboard notification and dispatch it.
    ///
    /// Malformed payloads are dropped with a warning instead of
    /// panicking. Returns true if the event was dispatched and consumed.
    pub fn publish_raw(&self, raw: &RawNotification) -> bool {
        match UiEvent::from_raw(raw) {
            Ok(event) => self.publish(event),
            Err(err) => {
                warn!(%err, kind = ?raw.kind, "dropping malformed keyboard notification");
                false
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NotificationKind;
    use crate::types::Rect;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_and_publish() {
        let bus = EventBus::new();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = bus.subscribe(move |_event| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        bus.publish(UiEvent::BackgroundTap);
        assert_eq!(count.get(), 1);

        bus.publish(UiEvent::KeyboardWillHide);
        assert_eq!(count.get(), 2);

        cleanup();

        bus.publish(UiEvent::BackgroundTap);
        assert_eq!(count.get(), 2); // No more increments
    }

    #[test]
    fn test_consume_stops_propagation() {
        let bus = EventBus::new();

        let _c1 = bus.subscribe(|_| true);

        let reached = Rc::new(Cell::new(false));
        let reached_clone = reached.clone();
        let _c2 = bus.subscribe(move |_| {
            reached_clone.set(true);
            false
        });

        assert!(bus.publish(UiEvent::BackgroundTap));
        assert!(!reached.get());
    }

    #[test]
    fn test_publish_reports_unconsumed() {
        let bus = EventBus::new();
        let _cleanup = bus.subscribe(|_| false);
        assert!(!bus.publish(UiEvent::BackgroundTap));
    }

    #[test]
    fn test_reentrant_publish_from_handler() {
        let bus = EventBus::new();

        let hides = Rc::new(Cell::new(0));
        let hides_clone = hides.clone();

        let bus_clone = bus.clone();
        let _c1 = bus.subscribe(move |event| {
            match event {
                UiEvent::BackgroundTap => {
                    // A handler reacting to a tap by publishing again.
                    bus_clone.publish(UiEvent::KeyboardWillHide);
                    false
                }
                UiEvent::KeyboardWillHide => {
                    hides_clone.set(hides_clone.get() + 1);
                    false
                }
                _ => false,
            }
        });

        bus.publish(UiEvent::BackgroundTap);
        assert_eq!(hides.get(), 1);
    }

    #[test]
    fn test_publish_raw_valid() {
        let bus = EventBus::new();

        let top = Rc::new(Cell::new(0.0f32));
        let top_clone = top.clone();
        let _cleanup = bus.subscribe(move |event| {
            if let UiEvent::KeyboardWillShow { keyboard_top } = event {
                top_clone.set(*keyboard_top);
            }
            false
        });

        bus.publish_raw(&RawNotification::will_show(Rect::new(
            0.0, 480.0, 390.0, 336.0,
        )));
        assert_eq!(top.get(), 480.0);
    }

    #[test]
    fn test_publish_raw_malformed_is_dropped() {
        let bus = EventBus::new();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _cleanup = bus.subscribe(move |_| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        let malformed = RawNotification {
            kind: NotificationKind::KeyboardFrameChanged,
            end_frame: None,
        };
        assert!(!bus.publish_raw(&malformed));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let c1 = bus.subscribe(|_| false);
        let _c2 = bus.subscribe(|_| false);
        assert_eq!(bus.subscriber_count(), 2);

        c1();
        assert_eq!(bus.subscriber_count(), 1);
    }
}
