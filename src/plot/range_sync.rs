//! Cross-plot range synchronization.
//!
//! When the operator pans or zooms one device plot, its new x-range is
//! broadcast to every sibling plot in the registry so the timeline stays
//! aligned, and the now-redundant sync controls are disabled. This is a full
//! broadcast into a shared registry: no diffing, no return value, no error
//! path. The registry owns the models; this module only writes fields.

#[cfg(test)]
#[path = "range_sync_test.rs"]
mod range_sync_test;

use std::collections::HashMap;

/// Label of the manual sync button. The leading space is significant; it
/// pads the button's icon.
pub const SYNC_BUTTON_LABEL: &str = " Sync";

/// Class the stylesheet uses to hide retired controls.
pub const HIDDEN_CLASS: &str = "xl-hidden";

/// An axis range, a start/end pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

/// A registry entity, discriminated by what the broadcast does to it.
/// Variants carry only the fields the broadcast mutates; anything else in
/// the registry is `Other` and left alone.
#[derive(Clone, Debug, PartialEq)]
pub enum Model {
    Plot { x_range: Range },
    Button { label: String, disabled: bool, css_classes: Vec<String> },
    Other,
}

/// The plotting layer's flat, unordered model collection, keyed by model id.
pub trait ModelRegistry {
    fn models_mut(&mut self) -> impl Iterator<Item = &mut Model>;
}

impl ModelRegistry for HashMap<String, Model> {
    fn models_mut(&mut self) -> impl Iterator<Item = &mut Model> {
        self.values_mut()
    }
}

/// Propagate `range` from the originating plot to the whole registry.
///
/// Every plot gets the new range, the origin included (rewriting identical
/// values is harmless). Every button is disabled, and the one labeled
/// [`SYNC_BUTTON_LABEL`] is additionally hidden.
pub fn broadcast_range(range: Range, registry: &mut impl ModelRegistry) {
    for model in registry.models_mut() {
        match model {
            Model::Plot { x_range } => *x_range = range,
            Model::Button { label, disabled, css_classes } => {
                *disabled = true;
                if label.as_str() == SYNC_BUTTON_LABEL {
                    *css_classes = vec![HIDDEN_CLASS.to_owned()];
                }
            }
            Model::Other => {}
        }
    }
}
