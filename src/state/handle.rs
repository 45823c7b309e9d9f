#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::dashboard::DashboardState;

/// Shared handle to the one `DashboardState`.
///
/// The poller and the action controllers only ever touch state through this
/// capability, so the same controller code runs against a Leptos signal in
/// the browser and a `Rc<RefCell<_>>` in native tests. All mutation happens
/// on the single UI thread; a handle is cheap to clone.
pub trait StateHandle: Clone {
    fn update(&self, f: impl FnOnce(&mut DashboardState));

    fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<DashboardState>> {
    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }

    fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }
}

impl StateHandle for leptos::prelude::RwSignal<DashboardState> {
    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        leptos::prelude::Update::update(self, f);
    }

    // Untracked on purpose: controllers run outside the reactive graph.
    fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        leptos::prelude::WithUntracked::with_untracked(self, f)
    }
}
