//! Operator confirmation as an explicit suspension point.
//!
//! The controller's follow-up logic runs only on an affirmative outcome;
//! declining produces no mutation and no request, which is why this returns
//! a plain bool instead of an error.

/// Ask the operator to confirm a destructive action.
#[allow(async_fn_in_trait)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`, blocking in the browser but modeled as any other
/// suspension point. A missing window counts as declined.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

#[cfg(feature = "hydrate")]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
