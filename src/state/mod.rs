//! State Module - focus and keyboard-cycle state systems
//!
//! The two small state machines the controller drives:
//!
//! - **Focus** - which field is editing, focus/blur callbacks,
//!   stale-loss guarding
//! - **Scroll** - keyboard visibility phase and the saved offset for
//!   one show cycle

mod focus;
mod scroll;

pub use focus::*;
pub use scroll::*;
