//! Focus System - currently-editing field and focus callbacks
//!
//! Tracks which registered field is editing:
//! - `focused` signal (currently editing field, `None` when idle)
//! - Focus-gained / focus-lost transitions
//! - Stale-loss guard (a lost event for a field that is no longer
//!   current must not clear focus)
//! - Focus callbacks (on_focus/on_blur) with cleanup functions
//!
//! # Example
//!
//! ```ignore
//! use formscroll::state::{FocusState, FocusCallbacks};
//! use formscroll::types::FieldId;
//!
//! let focus = FocusState::new();
//! let cleanup = focus.register_callbacks(FieldId::new(1), FocusCallbacks {
//!     on_focus: Some(Box::new(|| println!("editing"))),
//!     on_blur: Some(Box::new(|| println!("done"))),
//! });
//!
//! focus.focus_gained(FieldId::new(1));
//! assert!(focus.is_focused(FieldId::new(1)));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::types::FieldId;

// =============================================================================
// FOCUS CALLBACKS
// =============================================================================

/// Callbacks fired when a field gains or loses focus.
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn()>>,
    pub on_blur: Option<Box<dyn Fn()>>,
}

type CallbackRegistry = Rc<RefCell<HashMap<FieldId, Vec<FocusCallbacks>>>>;

// =============================================================================
// FOCUS STATE
// =============================================================================

/// Currently-focused field plus per-field callbacks.
///
/// Owned by the controller; nothing here is global. The focused field is
/// a signal so hosts can observe focus movement.
pub struct FocusState {
    focused: Signal<Option<FieldId>>,
    callbacks: CallbackRegistry,
}

impl FocusState {
    /// Create an unfocused state.
    pub fn new() -> Self {
        Self {
            focused: signal(None),
            callbacks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Get the currently focused field (`None` if no field is editing).
    pub fn focused(&self) -> Option<FieldId> {
        self.focused.get()
    }

    /// Check if any field is focused.
    pub fn has_focus(&self) -> bool {
        self.focused().is_some()
    }

    /// Check if a specific field is focused.
    pub fn is_focused(&self, id: FieldId) -> bool {
        self.focused() == Some(id)
    }

    /// The focused-field signal, for reactive observers.
    pub fn focused_signal(&self) -> Signal<Option<FieldId>> {
        self.focused.clone()
    }

    /// Record that `id` began editing.
    pub fn focus_gained(&self, id: FieldId) {
        self.set_focus_with_callbacks(Some(id));
    }

    /// Record that `id` stopped editing.
    ///
    /// Clears focus only if `id` is still the current field. When a new
    /// field gained focus in between, the late loss event is stale and
    /// must not clear it.
    pub fn focus_lost(&self, id: FieldId) {
        if self.focused() == Some(id) {
            self.set_focus_with_callbacks(None);
        }
    }

    /// Register focus callbacks for a field.
    /// Returns a cleanup function to unregister.
    pub fn register_callbacks(&self, id: FieldId, callbacks: FocusCallbacks) -> Box<dyn FnOnce()> {
        let callback_id = {
            let mut registry = self.callbacks.borrow_mut();
            let list = registry.entry(id).or_default();
            list.push(callbacks);
            list.len() - 1
        };

        let registry = self.callbacks.clone();
        Box::new(move || {
            let mut registry = registry.borrow_mut();
            if let Some(list) = registry.get_mut(&id) {
                if callback_id < list.len() {
                    // Mark as removed (removal would shift later ids)
                    list[callback_id].on_focus = None;
                    list[callback_id].on_blur = None;
                }
                if list
                    .iter()
                    .all(|cb| cb.on_focus.is_none() && cb.on_blur.is_none())
                {
                    registry.remove(&id);
                }
            }
        })
    }

    /// Set focus and fire callbacks at the source.
    fn set_focus_with_callbacks(&self, new: Option<FieldId>) {
        let old = self.focused();

        // No change, no callbacks
        if old == new {
            return;
        }

        // Fire on_blur for all callbacks on the old focus
        if let Some(old_id) = old {
            let registry = self.callbacks.borrow();
            if let Some(list) = registry.get(&old_id) {
                for cb in list {
                    if let Some(ref on_blur) = cb.on_blur {
                        on_blur();
                    }
                }
            }
        }

        self.focused.set(new);

        // Fire on_focus for all callbacks on the new focus
        if let Some(new_id) = new {
            let registry = self.callbacks.borrow();
            if let Some(list) = registry.get(&new_id) {
                for cb in list {
                    if let Some(ref on_focus) = cb.on_focus {
                        on_focus();
                    }
                }
            }
        }
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
