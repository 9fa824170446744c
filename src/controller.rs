//! Keyboard-Avoidance Controller - the event-driven core
//!
//! Glue between focus notifications, keyboard geometry, and the scroll
//! container. One show cycle, end to end:
//!
//! 1. A field gains focus → [`FocusState`] records it
//! 2. Keyboard will-show → the current offset is saved, once per cycle
//! 3. Keyboard frame changes → if the focused field's bottom edge (plus
//!    a margin) sits below the keyboard's top edge, scroll down by the
//!    overlap, animated
//! 4. Keyboard will-hide → restore the saved offset, animated
//!
//! The controller never initiates anything: it reacts to [`UiEvent`]s
//! delivered by the bus and issues requests (focus movement, keyboard
//! dismissal) back through the [`Host`] traits. The host confirms those
//! requests with further events, so every state change flows through the
//! same pipeline.
//!
//! # Example
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use formscroll::bus::EventBus;
//! use formscroll::controller::AvoidanceController;
//!
//! let bus = EventBus::new();
//! let controller = Rc::new(RefCell::new(AvoidanceController::new(fields, host)));
//! let detach = AvoidanceController::attach(controller.clone(), &bus);
//!
//! // Host wiring delivers platform notifications:
//! bus.publish_raw(&raw_will_show_notification);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::bus::EventBus;
use crate::events::UiEvent;
use crate::fields::FieldRegistry;
use crate::host::{Host, Motion};
use crate::state::{FocusState, KeyboardPhase, ScrollTracker};
use crate::toolbar::{AccessoryToolbar, toolbar_for};
use crate::types::{FieldId, Point};

// =============================================================================
// CONFIG
// =============================================================================

/// Tunables for the avoidance behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvoidanceConfig {
    /// Breathing room kept between the focused field's bottom edge and
    /// the keyboard, in the host's units.
    pub margin: f32,
    /// Dismiss the keyboard when the user starts dragging the scroll
    /// container.
    pub dismiss_on_drag: bool,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            dismiss_on_drag: true,
        }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Keyboard-avoidance controller over a host scroll container.
pub struct AvoidanceController<H: Host> {
    fields: FieldRegistry,
    focus: FocusState,
    tracker: ScrollTracker,
    config: AvoidanceConfig,
    host: H,
}

impl<H: Host> AvoidanceController<H> {
    /// Create a controller with the default configuration.
    pub fn new(fields: FieldRegistry, host: H) -> Self {
        Self::with_config(fields, host, AvoidanceConfig::default())
    }

    /// Create a controller with an explicit configuration.
    pub fn with_config(fields: FieldRegistry, host: H, config: AvoidanceConfig) -> Self {
        Self {
            fields,
            focus: FocusState::new(),
            tracker: ScrollTracker::new(),
            config,
            host,
        }
    }

    /// Subscribe a shared controller to a bus.
    /// Returns the cleanup function that detaches it.
    pub fn attach(controller: Rc<RefCell<Self>>, bus: &EventBus) -> Box<dyn FnOnce()>
    where
        H: 'static,
    {
        bus.subscribe(move |event| controller.borrow_mut().handle(event))
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// The field registry (for rect updates on layout changes).
    pub fn fields_mut(&mut self) -> &mut FieldRegistry {
        &mut self.fields
    }

    /// The field registry.
    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    /// Focus state (currently editing field, callbacks).
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Keyboard visibility phase.
    pub fn phase(&self) -> KeyboardPhase {
        self.tracker.phase()
    }

    /// The offset saved for the open show cycle, if any.
    pub fn saved_offset(&self) -> Option<Point> {
        self.tracker.saved_offset()
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Handle one event. Returns true if the event was consumed
    /// (currently only the return key, to suppress newline insertion).
    pub fn handle(&mut self, event: &UiEvent) -> bool {
        match *event {
            UiEvent::FocusGained(id) => {
                if self.fields.get(id).is_none() {
                    warn!(?id, "focus gained for unregistered field");
                    return false;
                }
                self.focus.focus_gained(id);
                false
            }
            UiEvent::FocusLost(id) => {
                self.focus.focus_lost(id);
                false
            }
            UiEvent::KeyboardWillShow { .. } => {
                // Some platforms fire will-show on dismissal too; with no
                // field editing there is nothing to save or restore.
                if !self.focus.has_focus() {
                    trace!("keyboard will-show with no focused field");
                    return false;
                }
                let current = self.host.content_offset();
                if self.tracker.begin_show(current) {
                    debug!(y = current.y, "saved pre-keyboard offset");
                }
                false
            }
            UiEvent::KeyboardFrameChanged { keyboard_top } => {
                self.adjust_for_overlap(keyboard_top);
                false
            }
            UiEvent::KeyboardWillHide => {
                if let Some(saved) = self.tracker.end_show() {
                    debug!(y = saved.y, "restoring pre-keyboard offset");
                    self.host.set_content_offset(saved, Motion::Animated);
                }
                false
            }
            UiEvent::ReturnKeyPressed(_) => {
                // Consume so the host suppresses the newline.
                self.host.dismiss_keyboard();
                true
            }
            UiEvent::BackgroundTap => {
                self.host.dismiss_keyboard();
                false
            }
            UiEvent::ScrollDragBegan => {
                if self.config.dismiss_on_drag && self.tracker.phase() != KeyboardPhase::Hidden {
                    self.host.dismiss_keyboard();
                }
                false
            }
        }
    }

    /// Scroll the focused field clear of the keyboard if it is obscured.
    ///
    /// No-ops, in order: no focused field (frame changes also fire
    /// during dismissal), field unknown, conversion unavailable (view
    /// detached), field already fully visible. The visible case must not
    /// scroll back up; only will-hide restores.
    fn adjust_for_overlap(&mut self, keyboard_top: f32) {
        let Some(focused) = self.focus.focused() else {
            trace!("keyboard frame change with no focused field");
            return;
        };
        let Some(field) = self.fields.get(focused) else {
            warn!(?focused, "focused field missing from registry");
            return;
        };
        let Some(frame) = self.host.convert_to_window(field.rect) else {
            trace!(?focused, "field not convertible to window space");
            return;
        };

        let overlap = (frame.max_y() + self.config.margin) - keyboard_top;
        if overlap <= 0.0 {
            return;
        }

        let current = self.host.content_offset();
        let target = Point::new(current.x, current.y + overlap);
        debug!(?focused, overlap, "scrolling field clear of keyboard");
        self.host.set_content_offset(target, Motion::Animated);
        self.tracker.note_adjusted();
    }

    // -------------------------------------------------------------------------
    // Toolbar actions
    // -------------------------------------------------------------------------

    /// The toolbar description for a field, targets resolved.
    pub fn toolbar_for(&self, id: FieldId) -> Option<AccessoryToolbar> {
        toolbar_for(&self.fields, id)
    }

    /// Toolbar "previous": request focus of the field before the current
    /// one. Returns false on the first field, without navigation items,
    /// or with nothing focused.
    pub fn focus_previous(&mut self) -> bool {
        let Some(current) = self.focus.focused() else {
            return false;
        };
        let Some(toolbar) = toolbar_for(&self.fields, current) else {
            return false;
        };
        match toolbar.previous_target {
            Some(target) => {
                self.host.request_focus(target);
                true
            }
            None => false,
        }
    }

    /// Toolbar "next": request focus of the field after the current one.
    /// Returns false on the last field, without navigation items, or
    /// with nothing focused.
    pub fn focus_next(&mut self) -> bool {
        let Some(current) = self.focus.focused() else {
            return false;
        };
        let Some(toolbar) = toolbar_for(&self.fields, current) else {
            return false;
        };
        match toolbar.next_target {
            Some(target) => {
                self.host.request_focus(target);
                true
            }
            None => false,
        }
    }

    /// Toolbar "done": dismiss the keyboard unconditionally.
    pub fn done(&mut self) {
        self.host.dismiss_keyboard();
    }
}

// =============================================================================
// TESTS
// =============================================================================
