//! Host traits - the seam between the controller and the UI framework
//!
//! The controller never touches a real view hierarchy. Everything it
//! needs from the host is behind two small traits:
//!
//! - [`ScrollHost`] - the scroll container primitive: read/write the
//!   content offset, convert a container-local rectangle into the shared
//!   (window) coordinate space
//! - [`FocusHost`] - focus movement and keyboard dismissal requests
//!
//! Requests are one-way: asking the host to focus a field or dismiss the
//! keyboard does not mutate controller state directly. The host answers
//! with the corresponding events on the bus, so state changes always
//! flow through the same path.

use crate::types::{FieldId, Point, Rect};

// =============================================================================
// MOTION
// =============================================================================

/// How an offset change should be presented.
///
/// Purely a visual hint. Nothing awaits an animation's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Animate the transition.
    Animated,
    /// Jump without animation.
    Immediate,
}

// =============================================================================
// HOST TRAITS
// =============================================================================

/// The scroll container primitive.
pub trait ScrollHost {
    /// Current content offset.
    fn content_offset(&self) -> Point;

    /// Set the content offset.
    fn set_content_offset(&mut self, offset: Point, motion: Motion);

    /// Convert a rectangle from container-local (content) coordinates
    /// into the window space keyboard geometry is reported in.
    ///
    /// Returns `None` when the conversion is unavailable, e.g. the view
    /// is detached from the hierarchy.
    fn convert_to_window(&self, rect: Rect) -> Option<Rect>;
}

/// Focus movement and keyboard dismissal.
pub trait FocusHost {
    /// Ask the host to move input focus to a field. The host confirms
    /// by publishing `FocusGained` for it.
    fn request_focus(&mut self, field: FieldId);

    /// Ask the host to dismiss the keyboard. The host confirms by
    /// publishing the keyboard-will-hide notification.
    fn dismiss_keyboard(&mut self);
}

/// Everything the controller needs from the host.
pub trait Host: ScrollHost + FocusHost {}

impl<T: ScrollHost + FocusHost> Host for T {}

// =============================================================================
// TEST SUPPORT
// =============================================================================

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Inspectable state behind [`MockHost`].
    #[derive(Debug, Default)]
    pub(crate) struct MockHostState {
        pub offset: Point,
        /// Container origin in window space.
        pub window_origin: Point,
        /// When true, conversions fail (view detached).
        pub detached: bool,
        pub motions: Vec<Motion>,
        pub focus_requests: Vec<FieldId>,
        pub dismiss_count: usize,
    }

    /// Scroll/focus host double with an `Rc`-shared journal, so tests
    /// keep a handle after moving the host into a controller.
    pub(crate) struct MockHost {
        state: Rc<RefCell<MockHostState>>,
    }

    impl MockHost {
        pub fn new() -> (Self, Rc<RefCell<MockHostState>>) {
            let state = Rc::new(RefCell::new(MockHostState::default()));
            (
                Self {
                    state: state.clone(),
                },
                state,
            )
        }
    }

    impl ScrollHost for MockHost {
        fn content_offset(&self) -> Point {
            self.state.borrow().offset
        }

        fn set_content_offset(&mut self, offset: Point, motion: Motion) {
            let mut state = self.state.borrow_mut();
            state.offset = offset;
            state.motions.push(motion);
        }

        fn convert_to_window(&self, rect: Rect) -> Option<Rect> {
            let state = self.state.borrow();
            if state.detached {
                return None;
            }
            // Content coordinates scroll with the container: window
            // position = content position - offset + container origin.
            Some(rect.offset_by(Point::new(
                state.window_origin.x - state.offset.x,
                state.window_origin.y - state.offset.y,
            )))
        }
    }

    impl FocusHost for MockHost {
        fn request_focus(&mut self, field: FieldId) {
            self.state.borrow_mut().focus_requests.push(field);
        }

        fn dismiss_keyboard(&mut self) {
            self.state.borrow_mut().dismiss_count += 1;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
