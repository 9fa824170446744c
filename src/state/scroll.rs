//! Scroll System - keyboard visibility phase and saved offset
//!
//! One show cycle of the keyboard, as scroll state sees it:
//!
//! ```text
//! Hidden → Showing (offset captured) → Visible (adjusted, re-entrant) → Hidden (restored)
//! ```
//!
//! The tracker owns exactly two things: the phase (a signal, so hosts
//! can observe keyboard visibility) and the offset saved when the cycle
//! began. The capture-once rule lives here: platforms re-fire will-show
//! during a visible period (rotation, frame adjustment) and the value
//! captured first must survive.
//!
//! The container's *current* offset is not stored; the controller reads
//! it from the host when events arrive.

use std::cell::Cell;

use spark_signals::{Signal, signal};

use crate::types::Point;

// =============================================================================
// KEYBOARD PHASE
// =============================================================================

/// Keyboard visibility as the scroll state machine tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardPhase {
    /// No show cycle in progress.
    #[default]
    Hidden,
    /// Will-show received, offset captured, no adjustment yet.
    Showing,
    /// At least one overlap adjustment applied this cycle.
    Visible,
}

// =============================================================================
// SCROLL TRACKER
// =============================================================================

/// Saved-offset bookkeeping for the current show cycle.
pub struct ScrollTracker {
    phase: Signal<KeyboardPhase>,
    saved_offset: Cell<Option<Point>>,
}

impl ScrollTracker {
    /// Create a tracker in the `Hidden` phase.
    pub fn new() -> Self {
        Self {
            phase: signal(KeyboardPhase::Hidden),
            saved_offset: Cell::new(None),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> KeyboardPhase {
        self.phase.get()
    }

    /// The phase signal, for reactive observers.
    pub fn phase_signal(&self) -> Signal<KeyboardPhase> {
        self.phase.clone()
    }

    /// The offset saved for the current show cycle, if one is open.
    pub fn saved_offset(&self) -> Option<Point> {
        self.saved_offset.get()
    }

    /// Begin a show cycle, capturing `current` as the offset to restore.
    ///
    /// Captures exactly once per cycle: if a cycle is already open the
    /// first capture stands. Returns whether this call captured.
    pub fn begin_show(&self, current: Point) -> bool {
        if self.saved_offset.get().is_some() {
            return false;
        }
        self.saved_offset.set(Some(current));
        self.phase.set(KeyboardPhase::Showing);
        true
    }

    /// Record that an overlap adjustment was applied.
    pub fn note_adjusted(&self) {
        self.phase.set(KeyboardPhase::Visible);
    }

    /// End the show cycle.
    ///
    /// Returns the offset to restore, or `None` when no cycle was open
    /// (hide without a matching show).
    pub fn end_show(&self) -> Option<Point> {
        self.phase.set(KeyboardPhase::Hidden);
        self.saved_offset.take()
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
