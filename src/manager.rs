//! Cart Manager

use tracing::{error, warn};

use crate::{
    cart::Cart,
    events::CartObserver,
    notify::Notification,
    products::{Product, ProductId},
    storage::{self, CartStore},
    summary::CartSummary,
};

/// Cart Manager
///
/// Owns the authoritative cart state and keeps the persisted snapshot and
/// the derived view consistent with it on every mutation. After each
/// mutating operation the manager persists the cart, then notifies the
/// observer with a fresh summary; `add_item` additionally emits a
/// confirmation for the toast presenter.
///
/// Operations run synchronously to completion; there is no suspension
/// mid-mutation and no shared state outside this instance. Persistence
/// failures are logged and never roll back the in-memory mutation.
#[derive(Debug)]
pub struct CartManager<S: CartStore, O: CartObserver> {
    cart: Cart,
    store: S,
    observer: O,
}

impl<S: CartStore, O: CartObserver> CartManager<S, O> {
    /// Restore a manager from the store's persisted snapshot.
    ///
    /// An absent snapshot yields an empty cart. So does a snapshot that
    /// cannot be read or decoded: malformed persisted state is recovered
    /// locally, logged, and never surfaced as an error.
    pub fn restore(store: S, observer: O) -> Self {
        let cart = match store.load() {
            Ok(Some(blob)) => match storage::decode(&blob) {
                Ok(lines) => Cart::from_lines(lines),
                Err(cause) => {
                    warn!(%cause, "discarding malformed cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(cause) => {
                warn!(%cause, "failed to load cart snapshot, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            store,
            observer,
        }
    }

    /// Add one of the given product to the cart.
    ///
    /// Increments the existing line's quantity or appends a new line with
    /// quantity 1, then persists, refreshes the view, and emits a
    /// confirmation naming the product. Always succeeds for a valid
    /// product.
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add(product);
        self.after_mutation();
        self.observer
            .confirmation(&Notification::added_to_cart(product));
    }

    /// Remove the line matching the given product id.
    ///
    /// A silent no-op when absent; the view is still refreshed.
    pub fn remove_item(&mut self, id: ProductId) {
        self.cart.remove(id);
        self.after_mutation();
    }

    /// Set the quantity of the line matching the given product id.
    ///
    /// A quantity of zero or less removes the line; a positive quantity
    /// replaces the line's quantity exactly. A silent no-op when absent.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
        self.after_mutation();
    }

    /// Empty the cart entirely, persisting and refreshing as usual.
    pub fn clear(&mut self) {
        self.cart = Cart::new();
        self.after_mutation();
    }

    /// Derive the current summary. Pure read, no side effects.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.cart)
    }

    /// Read-only access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Persist the cart and refresh the view, in that order.
    fn after_mutation(&mut self) {
        self.persist();
        self.observer.cart_changed(&self.summary());
    }

    /// Write the current line sequence to the store.
    ///
    /// Failures are reported to the log only; the in-memory cart remains
    /// the source of truth for the session.
    fn persist(&mut self) {
        let blob = match storage::encode(self.cart.lines()) {
            Ok(blob) => blob,
            Err(cause) => {
                error!(%cause, "failed to encode cart snapshot");
                return;
            }
        };

        if let Err(cause) = self.store.save(&blob) {
            error!(%cause, "failed to persist cart snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::{
        events::NoopObserver,
        fixtures,
        storage::{MemoryStore, StoreError},
    };

    fn product(id: u32) -> Product {
        fixtures::catalog()
            .get(ProductId::new(id))
            .cloned()
            .unwrap_or_else(|| panic!("fixture catalog has no product {id}"))
    }

    /// Observer double that records every callback it receives.
    #[derive(Debug, Default)]
    struct Recording {
        summaries: Vec<CartSummary>,
        confirmations: Vec<String>,
    }

    impl CartObserver for &mut Recording {
        fn cart_changed(&mut self, summary: &CartSummary) {
            self.summaries.push(summary.clone());
        }

        fn confirmation(&mut self, notification: &Notification) {
            self.confirmations.push(notification.message().to_string());
        }
    }

    /// Store double whose writes always fail.
    #[derive(Debug, Default)]
    struct BrokenStore;

    impl CartStore for BrokenStore {
        fn save(&mut self, _blob: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn load(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn add_item_persists_then_notifies_with_confirmation() -> TestResult {
        let mut recording = Recording::default();
        let mut manager = CartManager::restore(MemoryStore::new(), &mut recording);

        manager.add_item(&product(1));

        let store_blob = manager.store.load()?;
        assert!(store_blob.is_some(), "mutation must be persisted");

        drop(manager);
        assert_eq!(recording.summaries.len(), 1);
        assert_eq!(
            recording.confirmations,
            ["Biologische Tomaten toegevoegd aan winkelwagen"]
        );

        Ok(())
    }

    #[test]
    fn remove_and_set_quantity_refresh_without_confirmation() {
        let mut recording = Recording::default();
        let mut manager = CartManager::restore(MemoryStore::new(), &mut recording);

        manager.add_item(&product(1));
        manager.set_quantity(ProductId::new(1), 5);
        manager.remove_item(ProductId::new(1));

        drop(manager);
        assert_eq!(recording.summaries.len(), 3);
        assert_eq!(recording.confirmations.len(), 1, "only add_item confirms");
    }

    #[test]
    fn restore_round_trips_through_the_store() -> TestResult {
        let mut store = MemoryStore::new();

        {
            let mut manager = CartManager::restore(store.clone(), NoopObserver);
            manager.add_item(&product(2));
            manager.add_item(&product(3));
            manager.add_item(&product(2));
            store = manager.store;
        }

        let manager = CartManager::restore(store, NoopObserver);
        let summary = manager.summary();

        assert_eq!(summary.total_items(), 3);
        assert_eq!(
            summary
                .lines()
                .iter()
                .map(|line| line.id.get())
                .collect::<Vec<_>>(),
            [2, 3]
        );

        Ok(())
    }

    #[test]
    fn restore_treats_malformed_snapshots_as_absent() {
        let store = MemoryStore::with_blob("certainly not json");

        let manager = CartManager::restore(store, NoopObserver);

        assert!(manager.cart().is_empty());
    }

    #[test]
    fn restore_survives_an_unreadable_store() {
        let manager = CartManager::restore(BrokenStore, NoopObserver);

        assert!(manager.cart().is_empty());
    }

    #[test]
    fn persistence_failure_keeps_the_in_memory_mutation() {
        let mut manager = CartManager::restore(BrokenStore, NoopObserver);

        manager.add_item(&product(1));

        assert_eq!(manager.summary().total_items(), 1);
    }

    #[test]
    fn clear_empties_the_cart_and_persists() -> TestResult {
        let mut manager = CartManager::restore(MemoryStore::new(), NoopObserver);
        manager.add_item(&product(1));
        manager.add_item(&product(2));

        manager.clear();

        assert!(manager.cart().is_empty());
        assert_eq!(manager.store.load()?, Some("[]".to_string()));
        assert_eq!(manager.summary().total(), Decimal::ZERO);

        Ok(())
    }
}
