//! Network layer: the server API capability, the reconciliation poller, and
//! the optimistic action controllers.

pub mod actions;
pub mod api;
pub mod poll;
