//! Events

use crate::{notify::Notification, summary::CartSummary};

/// Observer for cart changes, implemented by the presentation layer.
///
/// Both callbacks fire synchronously, on the same call stack as the
/// mutation that caused them. Observers receive read-only derived data and
/// cannot reach back into the cart.
pub trait CartObserver {
    /// Fired after every mutating operation with the freshly derived summary.
    fn cart_changed(&mut self, summary: &CartSummary) {
        let _ = summary;
    }

    /// Fired after a successful add with a confirmation for the toast
    /// presenter.
    fn confirmation(&mut self, notification: &Notification) {
        let _ = notification;
    }
}

/// Observer that ignores every callback.
///
/// Used when no presentation layer is attached, for example in headless
/// tests of the persistence path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {}
