//! BioMarkt prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    events::{CartObserver, NoopObserver},
    manager::CartManager,
    notify::{DEFAULT_DISMISS, Notification},
    products::{Catalog, Product, ProductId},
    storage::{CartStore, JsonFileStore, MemoryStore, StoreError},
    summary::{CartSummary, LineSummary},
};
