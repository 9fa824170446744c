//! Event types - typed UI events and raw notification validation
//!
//! The host delivers everything the controller reacts to as a [`UiEvent`]:
//! focus lifecycle, keyboard geometry, return key, taps, drags. Keyboard
//! geometry arrives from platforms as loosely-typed notification payloads,
//! so those pass through [`UiEvent::from_raw`] which validates instead of
//! unwrapping: a malformed payload is an outcome, not a crash.
//!
//! # Example
//!
//! ```ignore
//! use formscroll::events::{RawNotification, UiEvent};
//! use formscroll::types::Rect;
//!
//! let raw = RawNotification::will_show(Rect::new(0.0, 480.0, 390.0, 336.0));
//! let event = UiEvent::from_raw(&raw)?;
//! assert_eq!(event, UiEvent::KeyboardWillShow { keyboard_top: 480.0 });
//! ```

use thiserror::Error;

use crate::types::{FieldId, Rect};

// =============================================================================
// TYPES
// =============================================================================

/// A UI event delivered to the controller.
///
/// Keyboard variants carry only the keyboard's top edge in the shared
/// (window) coordinate space; the overlap computation needs nothing else
/// from the keyboard frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// A field began editing.
    FocusGained(FieldId),
    /// A field stopped editing.
    FocusLost(FieldId),
    /// The keyboard is about to appear. Also fired by some platforms
    /// during dismissal, which is why handling is gated on focus.
    KeyboardWillShow { keyboard_top: f32 },
    /// The keyboard frame changed while visible (appearance, rotation,
    /// layout adjustment).
    KeyboardFrameChanged { keyboard_top: f32 },
    /// The keyboard is about to disappear.
    KeyboardWillHide,
    /// The return key was pressed in a field.
    ReturnKeyPressed(FieldId),
    /// The background behind the fields was tapped.
    BackgroundTap,
    /// The user started dragging the scroll container.
    ScrollDragBegan,
}

// =============================================================================
// RAW NOTIFICATIONS
// =============================================================================

/// Which keyboard notification a raw payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    KeyboardWillShow,
    KeyboardFrameChanged,
    KeyboardWillHide,
}

/// A keyboard notification as the platform hands it over: kind plus an
/// optional end-frame rectangle in window space.
///
/// `end_frame` is optional because notification payloads are untyped
/// dictionaries on the platforms this models; absence is a real case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawNotification {
    pub kind: NotificationKind,
    pub end_frame: Option<Rect>,
}

impl RawNotification {
    /// A will-show notification carrying the keyboard's end frame.
    pub const fn will_show(end_frame: Rect) -> Self {
        Self {
            kind: NotificationKind::KeyboardWillShow,
            end_frame: Some(end_frame),
        }
    }

    /// A frame-changed notification carrying the keyboard's end frame.
    pub const fn frame_changed(end_frame: Rect) -> Self {
        Self {
            kind: NotificationKind::KeyboardFrameChanged,
            end_frame: Some(end_frame),
        }
    }

    /// A will-hide notification. Carries no geometry; none is needed.
    pub const fn will_hide() -> Self {
        Self {
            kind: NotificationKind::KeyboardWillHide,
            end_frame: None,
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Why a raw notification could not be turned into an event.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// Show/frame-change notifications must carry the keyboard end frame.
    #[error("keyboard notification is missing its end-frame payload")]
    MissingKeyboardFrame,
    /// The end frame contained NaN or infinite coordinates.
    #[error("keyboard end frame has non-finite geometry")]
    NonFiniteKeyboardFrame,
}

impl UiEvent {
    /// Validate a raw keyboard notification into a typed event.
    ///
    /// Geometry-carrying notifications without a usable end frame yield
    /// an [`EventError`] instead of panicking.
    pub fn from_raw(raw: &RawNotification) -> Result<Self, EventError> {
        match raw.kind {
            NotificationKind::KeyboardWillHide => Ok(Self::KeyboardWillHide),
            NotificationKind::KeyboardWillShow => {
                let top = keyboard_top(raw)?;
                Ok(Self::KeyboardWillShow { keyboard_top: top })
            }
            NotificationKind::KeyboardFrameChanged => {
                let top = keyboard_top(raw)?;
                Ok(Self::KeyboardFrameChanged { keyboard_top: top })
            }
        }
    }
}

/// Extract and sanity-check the keyboard's top edge from a raw payload.
fn keyboard_top(raw: &RawNotification) -> Result<f32, EventError> {
    let frame = raw.end_frame.ok_or(EventError::MissingKeyboardFrame)?;
    let top = frame.min_y();
    if !top.is_finite() {
        return Err(EventError::NonFiniteKeyboardFrame);
    }
    Ok(top)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_will_show_extracts_top_edge() {
        let raw = RawNotification::will_show(Rect::new(0.0, 480.0, 390.0, 336.0));
        assert_eq!(
            UiEvent::from_raw(&raw),
            Ok(UiEvent::KeyboardWillShow { keyboard_top: 480.0 })
        );
    }

    #[test]
    fn test_frame_changed_extracts_top_edge() {
        let raw = RawNotification::frame_changed(Rect::new(0.0, 512.0, 390.0, 304.0));
        assert_eq!(
            UiEvent::from_raw(&raw),
            Ok(UiEvent::KeyboardFrameChanged { keyboard_top: 512.0 })
        );
    }

    #[test]
    fn test_will_hide_needs_no_geometry() {
        let raw = RawNotification::will_hide();
        assert_eq!(UiEvent::from_raw(&raw), Ok(UiEvent::KeyboardWillHide));
    }

    #[test]
    fn test_missing_frame_is_an_error() {
        let raw = RawNotification {
            kind: NotificationKind::KeyboardWillShow,
            end_frame: None,
        };
        assert_eq!(
            UiEvent::from_raw(&raw),
            Err(EventError::MissingKeyboardFrame)
        );
    }

    #[test]
    fn test_non_finite_frame_is_an_error() {
        let raw = RawNotification::frame_changed(Rect::new(0.0, f32::NAN, 390.0, 336.0));
        assert_eq!(
            UiEvent::from_raw(&raw),
            Err(EventError::NonFiniteKeyboardFrame)
        );
    }

    #[test]
    fn test_hide_ignores_stray_payload() {
        // Platforms sometimes attach a frame to hide notifications too.
        let raw = RawNotification {
            kind: NotificationKind::KeyboardWillHide,
            end_frame: Some(Rect::new(0.0, 844.0, 390.0, 0.0)),
        };
        assert_eq!(UiEvent::from_raw(&raw), Ok(UiEvent::KeyboardWillHide));
    }
}
