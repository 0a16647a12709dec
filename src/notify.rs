//! Notifications

use std::time::Duration;

use crate::products::Product;

/// How long a notification stays visible before the presenter dismisses it.
pub const DEFAULT_DISMISS: Duration = Duration::from_secs(3);

/// A transient, human-readable message for the toast presenter.
///
/// Carries no cart state; the presenter shows the message for
/// `dismiss_after` and then drops it. Dismissal is an independent delayed
/// action with no effect on the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    dismiss_after: Duration,
}

impl Notification {
    /// Create a notification with the default dismissal duration.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismiss_after: DEFAULT_DISMISS,
        }
    }

    /// Create a notification with an explicit dismissal duration.
    #[must_use]
    pub fn with_dismiss_after(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            message: message.into(),
            dismiss_after,
        }
    }

    /// The confirmation shown after a product lands in the cart.
    #[must_use]
    pub fn added_to_cart(product: &Product) -> Self {
        Self::new(format!("{} toegevoegd aan winkelwagen", product.name))
    }

    /// The message to display.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How long the presenter should keep the notification visible.
    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}
