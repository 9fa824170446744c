//! Field Registry - ordered membership of focusable input fields
//!
//! Hosts register every text field once at view setup, in visual order.
//! Membership never changes afterwards; only the bounding rectangles do
//! (the host pushes updates when layout moves things around).
//!
//! Ordering is registration order. Previous/next lookups for toolbar
//! navigation come straight from it.
//!
//! # Example
//!
//! ```ignore
//! use formscroll::fields::FieldRegistry;
//! use formscroll::toolbar::ToolbarItems;
//! use formscroll::types::{FieldId, Rect};
//!
//! let mut fields = FieldRegistry::new();
//! fields.register(FieldId::new(1), Rect::new(16.0, 80.0, 340.0, 40.0), ToolbarItems::DONE);
//! fields.register(FieldId::new(2), Rect::new(16.0, 140.0, 340.0, 40.0), ToolbarItems::all());
//!
//! assert_eq!(fields.next_of(FieldId::new(1)), Some(FieldId::new(2)));
//! ```

use tracing::warn;

use crate::toolbar::ToolbarItems;
use crate::types::{FieldId, Rect};

// =============================================================================
// TYPES
// =============================================================================

/// A registered input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusableField {
    /// Host-assigned identity.
    pub id: FieldId,
    /// Bounding rectangle in the scroll container's content coordinates.
    pub rect: Rect,
    /// Which accessory toolbar items this field's keyboard carries.
    pub toolbar: ToolbarItems,
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Ordered registry of focusable fields.
///
/// Backed by a plain vec; forms have a handful of fields and linear
/// scans keep the ordering story obvious.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: Vec<FocusableField>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a field at the end of the order.
    ///
    /// Duplicate ids are rejected (the first registration wins);
    /// membership is set up once and identity must stay unambiguous.
    /// Returns whether the field was added.
    pub fn register(&mut self, id: FieldId, rect: Rect, toolbar: ToolbarItems) -> bool {
        if self.index_of(id).is_some() {
            warn!(?id, "ignoring duplicate field registration");
            return false;
        }
        self.fields.push(FocusableField { id, rect, toolbar });
        true
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ordering index of a field.
    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id == id)
    }

    /// Look up a field by id.
    pub fn get(&self, id: FieldId) -> Option<&FocusableField> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Look up a field by ordering index.
    pub fn by_index(&self, index: usize) -> Option<&FocusableField> {
        self.fields.get(index)
    }

    /// Replace a field's bounding rectangle after a layout change.
    /// Returns whether the field was known.
    pub fn update_rect(&mut self, id: FieldId, rect: Rect) -> bool {
        match self.fields.iter_mut().find(|field| field.id == id) {
            Some(field) => {
                field.rect = rect;
                true
            }
            None => {
                warn!(?id, "rect update for unknown field");
                false
            }
        }
    }

    /// The field ordered immediately before `id`, if any.
    pub fn previous_of(&self, id: FieldId) -> Option<FieldId> {
        let index = self.index_of(id)?;
        index
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .map(|field| field.id)
    }

    /// The field ordered immediately after `id`, if any.
    pub fn next_of(&self, id: FieldId) -> Option<FieldId> {
        let index = self.index_of(id)?;
        self.fields.get(index + 1).map(|field| field.id)
    }

    /// Iterate fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &FocusableField> {
        self.fields.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
