//! BioMarkt
//!
//! BioMarkt is the cart engine for a client-side organic-grocery
//! storefront: an immutable product catalog, an insertion-ordered cart with
//! snapshot persistence across sessions, and synchronous change and
//! confirmation notifications for a rendering layer.

pub mod cart;
pub mod events;
pub mod fixtures;
pub mod manager;
pub mod notify;
pub mod prelude;
pub mod products;
pub mod storage;
pub mod summary;
