use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Fake element whose bounding box follows its offset, like a reflowed DOM
/// node would.
struct FakeTooltip {
    edges: Cell<EdgeRect>,
    offset: Cell<f64>,
}

impl FakeTooltip {
    fn new(left: f64, right: f64, offset: f64) -> Rc<Self> {
        Rc::new(Self { edges: Cell::new(EdgeRect { left, right }), offset: Cell::new(offset) })
    }
}

impl TooltipElement for Rc<FakeTooltip> {
    fn edges(&self) -> EdgeRect {
        self.edges.get()
    }

    fn offset_left(&self) -> f64 {
        self.offset.get()
    }

    fn set_offset_left(&self, px: f64) {
        let delta = px - self.offset.get();
        let edges = self.edges.get();
        self.edges.set(EdgeRect { left: edges.left + delta, right: edges.right + delta });
        self.offset.set(px);
    }
}

struct FakeViewport {
    width: f64,
    tooltips: Vec<Rc<FakeTooltip>>,
}

impl TooltipEnvironment for FakeViewport {
    type Element = Rc<FakeTooltip>;

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn tooltip_elements(&self) -> Vec<Rc<FakeTooltip>> {
        self.tooltips.clone()
    }
}

#[test]
fn left_overflow_shifts_right_by_overflow_amount() {
    assert_eq!(
        clamped_offset(EdgeRect { left: -15.0, right: 120.0 }, 100.0, 780.0),
        Some(115.0)
    );
}

#[test]
fn right_overflow_shifts_left_by_overflow_amount() {
    // innerWidth 800 => usable 780; right edge at 820 overflows by 40.
    assert_eq!(
        clamped_offset(EdgeRect { left: 700.0, right: 820.0 }, 300.0, 780.0),
        Some(260.0)
    );
}

#[test]
fn on_screen_tooltip_is_left_alone() {
    assert_eq!(clamped_offset(EdgeRect { left: 10.0, right: 500.0 }, 100.0, 780.0), None);
}

#[test]
fn left_overflow_takes_precedence_over_right() {
    // A tooltip wider than the viewport overflows both edges; only the
    // left-edge correction applies.
    assert_eq!(
        clamped_offset(EdgeRect { left: -5.0, right: 900.0 }, 40.0, 780.0),
        Some(45.0)
    );
}

#[test]
fn clamp_is_idempotent() {
    let tooltip = FakeTooltip::new(-15.0, 120.0, 100.0);
    let env = FakeViewport { width: 800.0, tooltips: vec![Rc::clone(&tooltip)] };

    clamp_tooltips(&env);
    assert_eq!(tooltip.offset.get(), 115.0);
    assert_eq!(tooltip.edges.get(), EdgeRect { left: 0.0, right: 135.0 });

    // Re-running on the corrected geometry moves nothing.
    clamp_tooltips(&env);
    assert_eq!(tooltip.offset.get(), 115.0);
}

#[test]
fn clamp_corrects_each_tooltip_independently() {
    let off_left = FakeTooltip::new(-30.0, 80.0, 0.0);
    let off_right = FakeTooltip::new(700.0, 820.0, 300.0);
    let fine = FakeTooltip::new(200.0, 400.0, 250.0);
    let env = FakeViewport {
        width: 800.0,
        tooltips: vec![Rc::clone(&off_left), Rc::clone(&off_right), Rc::clone(&fine)],
    };

    clamp_tooltips(&env);

    assert_eq!(off_left.offset.get(), 30.0);
    assert_eq!(off_right.offset.get(), 260.0);
    assert_eq!(fine.offset.get(), 250.0);
}
