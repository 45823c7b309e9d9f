//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One explicit, constructible `DashboardState` container owns everything the
//! view shows. Controllers receive it through the `StateHandle` capability
//! instead of closing over an ambient global, so the same code drives a
//! reactive signal in the browser and a plain `Rc<RefCell<_>>` in tests.

pub mod dashboard;
pub mod handle;
