//! # formscroll
//!
//! Keyboard-avoidance scrolling and toolbar navigation for form fields.
//!
//! When an on-screen keyboard covers the field the user is typing into,
//! the scroll container should slide just far enough to uncover it, and
//! slide back when the keyboard goes away. This crate is that behavior,
//! host-agnostic: the platform's focus and keyboard notifications come
//! in as typed events on an explicit bus, scroll and focus requests go
//! out through small host traits.
//!
//! ## Architecture
//!
//! ```text
//! platform notifications → EventBus → AvoidanceController → Host traits
//!        (validated)        (typed)     (focus + scroll         (offset,
//!                                        state machines)         focus,
//!                                                                dismiss)
//! ```
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals):
//! the focused field and the keyboard visibility phase are signals, so
//! hosts can react to them without polling.
//!
//! ## Modules
//!
//! - [`types`] - Geometry (`Point`, `Size`, `Rect`) and `FieldId`
//! - [`events`] - Typed UI events and raw-payload validation
//! - [`bus`] - Explicit event bus with consume-chain dispatch
//! - [`host`] - Traits the embedding UI framework implements
//! - [`fields`] - Ordered registry of focusable fields
//! - [`state`] - Focus and keyboard-cycle state machines
//! - [`controller`] - The keyboard-avoidance controller
//! - [`toolbar`] - Previous/next/done accessory toolbar model

pub mod bus;
pub mod controller;
pub mod events;
pub mod fields;
pub mod host;
pub mod state;
pub mod toolbar;
pub mod types;

// Re-export commonly used items
pub use types::{FieldId, Point, Rect, Size};

pub use events::{EventError, NotificationKind, RawNotification, UiEvent};

pub use bus::{EventBus, EventHandler};

pub use host::{FocusHost, Host, Motion, ScrollHost};

pub use fields::{FieldRegistry, FocusableField};

pub use state::{FocusCallbacks, FocusState, KeyboardPhase, ScrollTracker};

pub use controller::{AvoidanceConfig, AvoidanceController};

pub use toolbar::{AccessoryToolbar, ToolbarItems, toolbar_for};
