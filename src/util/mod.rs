//! Platform capabilities: task spawning, timers, and confirmation dialogs,
//! with browser implementations behind the `hydrate` feature.

pub mod confirm;
pub mod task;
