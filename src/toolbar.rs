//! Accessory Toolbar - previous/next/done above the keyboard
//!
//! Each field's keyboard carries a control strip. Which items it shows
//! is configured per field at registration ([`ToolbarItems`]); what the
//! items *do* is resolved here against the field order:
//!
//! - Previous focuses the field before this one; disabled on the first
//! - Next focuses the field after this one; disabled on the last
//! - Done dismisses the keyboard
//!
//! [`toolbar_for`] computes a render-ready description with targets and
//! enabled state resolved. The actions themselves go through the
//! controller ([`crate::controller::AvoidanceController::focus_previous`]
//! and friends), which routes focus requests to the host.

use bitflags::bitflags;

use crate::fields::FieldRegistry;
use crate::types::FieldId;

// =============================================================================
// TOOLBAR ITEMS
// =============================================================================

bitflags! {
    /// Which controls a field's accessory toolbar carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToolbarItems: u8 {
        /// The previous/next arrow pair.
        const PREVIOUS_NEXT = 1 << 0;
        /// The done button.
        const DONE = 1 << 1;
    }
}

impl Default for ToolbarItems {
    /// Done-only, the configuration for standalone fields.
    fn default() -> Self {
        Self::DONE
    }
}

// =============================================================================
// TOOLBAR DESCRIPTION
// =============================================================================

/// A field's toolbar with navigation targets resolved.
///
/// Hosts render from this; a `None` target on a present arrow pair means
/// the button is drawn disabled (first field has no previous, last has
/// no next).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryToolbar {
    pub field: FieldId,
    pub items: ToolbarItems,
    /// Field the previous arrow focuses. `None` on the first field.
    pub previous_target: Option<FieldId>,
    /// Field the next arrow focuses. `None` on the last field.
    pub next_target: Option<FieldId>,
}

impl AccessoryToolbar {
    /// Whether the arrow pair is part of this toolbar at all.
    pub fn has_navigation(&self) -> bool {
        self.items.contains(ToolbarItems::PREVIOUS_NEXT)
    }

    /// Whether the done button is part of this toolbar.
    pub fn has_done(&self) -> bool {
        self.items.contains(ToolbarItems::DONE)
    }

    /// Whether the previous arrow is tappable.
    pub fn previous_enabled(&self) -> bool {
        self.has_navigation() && self.previous_target.is_some()
    }

    /// Whether the next arrow is tappable.
    pub fn next_enabled(&self) -> bool {
        self.has_navigation() && self.next_target.is_some()
    }
}

/// Build the toolbar description for a field.
///
/// Returns `None` for an unknown field.
pub fn toolbar_for(fields: &FieldRegistry, id: FieldId) -> Option<AccessoryToolbar> {
    let field = fields.get(id)?;
    let items = field.toolbar;

    let (previous_target, next_target) = if items.contains(ToolbarItems::PREVIOUS_NEXT) {
        (fields.previous_of(id), fields.next_of(id))
    } else {
        (None, None)
    };

    Some(AccessoryToolbar {
        field: id,
        items,
        previous_target,
        next_target,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use proptest::prelude::*;

    fn registry_of(n: u32, items: ToolbarItems) -> FieldRegistry {
        let mut fields = FieldRegistry::new();
        for i in 0..n {
            fields.register(
                FieldId::new(i),
                Rect::new(16.0, 80.0 + 60.0 * i as f32, 340.0, 40.0),
                items,
            );
        }
        fields
    }

    #[test]
    fn test_middle_field_both_enabled() {
        let fields = registry_of(3, ToolbarItems::all());
        let toolbar = toolbar_for(&fields, FieldId::new(1)).unwrap();

        assert!(toolbar.previous_enabled());
        assert!(toolbar.next_enabled());
        assert_eq!(toolbar.previous_target, Some(FieldId::new(0)));
        assert_eq!(toolbar.next_target, Some(FieldId::new(2)));
        assert!(toolbar.has_done());
    }

    #[test]
    fn test_first_field_previous_disabled() {
        let fields = registry_of(3, ToolbarItems::all());
        let toolbar = toolbar_for(&fields, FieldId::new(0)).unwrap();

        assert!(!toolbar.previous_enabled());
        assert!(toolbar.next_enabled());
    }

    #[test]
    fn test_last_field_next_disabled() {
        let fields = registry_of(3, ToolbarItems::all());
        let toolbar = toolbar_for(&fields, FieldId::new(2)).unwrap();

        assert!(toolbar.previous_enabled());
        assert!(!toolbar.next_enabled());
    }

    #[test]
    fn test_done_only_toolbar_has_no_arrows() {
        let fields = registry_of(3, ToolbarItems::DONE);
        let toolbar = toolbar_for(&fields, FieldId::new(1)).unwrap();

        assert!(!toolbar.has_navigation());
        assert!(!toolbar.previous_enabled());
        assert!(!toolbar.next_enabled());
        assert_eq!(toolbar.previous_target, None);
        assert_eq!(toolbar.next_target, None);
        assert!(toolbar.has_done());
    }

    #[test]
    fn test_unknown_field_has_no_toolbar() {
        let fields = registry_of(2, ToolbarItems::all());
        assert_eq!(toolbar_for(&fields, FieldId::new(9)), None);
    }

    #[test]
    fn test_single_field_both_disabled() {
        let fields = registry_of(1, ToolbarItems::all());
        let toolbar = toolbar_for(&fields, FieldId::new(0)).unwrap();

        assert!(toolbar.has_navigation());
        assert!(!toolbar.previous_enabled());
        assert!(!toolbar.next_enabled());
    }

    proptest! {
        // Previous is disabled exactly on the first field, next exactly
        // on the last, for any field count.
        #[test]
        fn prop_boundary_disable(n in 1u32..16) {
            let fields = registry_of(n, ToolbarItems::all());

            for i in 0..n {
                let toolbar = toolbar_for(&fields, FieldId::new(i)).unwrap();
                prop_assert_eq!(toolbar.previous_enabled(), i != 0);
                prop_assert_eq!(toolbar.next_enabled(), i != n - 1);
            }
        }
    }
}
