//! Dashboard view components.

pub mod control_bar;
pub mod run_card;
