//! Helpers for the embedded timeline plot widget: tooltip geometry
//! correction and cross-plot range synchronization. Both mutate entities the
//! plotting layer owns; neither holds state of its own.

pub mod range_sync;
pub mod tooltip;
