//! Viewport clamping for floating plot tooltips.
//!
//! A tooltip that follows the cursor can poke past either edge of the
//! viewport; on every hover pass each tooltip is shifted back on-screen by
//! exactly its overflow amount. The correction is pure and idempotent: an
//! already-corrected tooltip moves no further.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// Safety margin subtracted from the viewport width before the right-edge
/// check.
pub const EDGE_MARGIN_PX: f64 = 20.0;

/// Class the plotting layer puts on tooltip elements.
pub const TOOLTIP_CLASS: &str = "bk-tooltip";

/// Stacking level that keeps tooltips above the plot chrome.
pub const TOOLTIP_Z_INDEX: &str = "1002";

/// Horizontal extent of an element, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeRect {
    pub left: f64,
    pub right: f64,
}

/// One tooltip element: its current geometry and its positioning offset.
pub trait TooltipElement {
    fn edges(&self) -> EdgeRect;

    /// The element's horizontal offset, parsed from its positioning style.
    fn offset_left(&self) -> f64;

    fn set_offset_left(&self, px: f64);
}

/// Where tooltips live: the document and its viewport. Queried fresh on
/// every clamp pass, never cached.
pub trait TooltipEnvironment {
    type Element: TooltipElement;

    fn viewport_width(&self) -> f64;

    fn tooltip_elements(&self) -> Vec<Self::Element>;
}

/// The corrected offset for one element, or `None` if it is already
/// on-screen. Left overflow is checked first and is exclusive with the
/// right-edge branch.
pub fn clamped_offset(edges: EdgeRect, offset_left: f64, usable_width: f64) -> Option<f64> {
    if edges.left < 0.0 {
        Some(offset_left - edges.left)
    } else if edges.right >= usable_width {
        Some(offset_left - edges.right + usable_width)
    } else {
        None
    }
}

/// Clamp every tooltip currently in the environment.
pub fn clamp_tooltips<E: TooltipEnvironment>(env: &E) {
    let usable_width = env.viewport_width() - EDGE_MARGIN_PX;
    for element in env.tooltip_elements() {
        if let Some(px) = clamped_offset(element.edges(), element.offset_left(), usable_width) {
            element.set_offset_left(px);
        }
    }
}

/// The real document, behind `hydrate`.
#[cfg(feature = "hydrate")]
pub mod dom {
    use wasm_bindgen::JsCast;

    use super::{EdgeRect, TOOLTIP_CLASS, TOOLTIP_Z_INDEX, TooltipElement, TooltipEnvironment};

    /// `TooltipEnvironment` over `window`/`document`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DomEnvironment;

    /// A tooltip element in the live document.
    pub struct DomTooltip(web_sys::HtmlElement);

    impl TooltipElement for DomTooltip {
        fn edges(&self) -> EdgeRect {
            let rect = self.0.get_bounding_client_rect();
            EdgeRect { left: rect.left(), right: rect.right() }
        }

        fn offset_left(&self) -> f64 {
            self.0
                .style()
                .get_property_value("left")
                .ok()
                .and_then(|v| v.trim_end_matches("px").parse().ok())
                .unwrap_or(0.0)
        }

        fn set_offset_left(&self, px: f64) {
            let _ = self.0.style().set_property("left", &format!("{px}px"));
        }
    }

    impl TooltipEnvironment for DomEnvironment {
        type Element = DomTooltip;

        fn viewport_width(&self) -> f64 {
            let window = web_sys::window();
            window
                .as_ref()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .filter(|w| *w > 0.0)
                .or_else(|| {
                    window
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|el| f64::from(el.client_width()))
                })
                .unwrap_or(0.0)
        }

        fn tooltip_elements(&self) -> Vec<DomTooltip> {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Vec::new();
            };
            let list = document.get_elements_by_class_name(TOOLTIP_CLASS);
            let mut elements = Vec::new();
            for i in 0..list.length() {
                let Some(el) = list.item(i) else { continue };
                let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
                    continue;
                };
                // Lift each tooltip above the plot chrome while we are here.
                let _ = el.style().set_property("z-index", TOOLTIP_Z_INDEX);
                elements.push(DomTooltip(el));
            }
            elements
        }
    }

    /// Hover-callback entry point: clamp every tooltip in the document.
    pub fn clamp_document_tooltips() {
        super::clamp_tooltips(&DomEnvironment);
    }
}
