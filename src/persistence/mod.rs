//! Durable key-value storage for store slices.
//!
//! Each persisted slice of [`StoreState`] lives under one fixed key as a
//! JSON document, and is always rewritten whole.

mod file;
mod memory;
mod sync;

use std::future::Future;

use crate::store::StoreState;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sync::{Rehydration, Synchronizer};

/// A string-keyed store of JSON documents.
///
/// Implementations must be thread-safe and their futures `Send`, since the
/// synchronizer runs on a background task.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StorageError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode slice: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// The persisted parts of [`StoreState`]. `is_cart_open` is session-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    Products,
    Cart,
    Quotes,
    Orders,
    Wishlist,
}

impl Slice {
    pub const ALL: [Slice; 5] = [Slice::Products, Slice::Cart, Slice::Quotes, Slice::Orders, Slice::Wishlist];

    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "mw_products",
            Self::Cart => "mw_cart",
            Self::Quotes => "mw_quotes",
            Self::Orders => "mw_orders",
            Self::Wishlist => "mw_wishlist",
        }
    }

    pub fn differs(self, a: &StoreState, b: &StoreState) -> bool {
        match self {
            Self::Products => a.products != b.products,
            Self::Cart => a.cart != b.cart,
            Self::Quotes => a.quotes != b.quotes,
            Self::Orders => a.orders != b.orders,
            Self::Wishlist => a.wishlist != b.wishlist,
        }
    }

    pub fn encode(self, state: &StoreState) -> Result<String, StorageError> {
        let json = match self {
            Self::Products => serde_json::to_string(&state.products)?,
            Self::Cart => serde_json::to_string(&state.cart)?,
            Self::Quotes => serde_json::to_string(&state.quotes)?,
            Self::Orders => serde_json::to_string(&state.orders)?,
            Self::Wishlist => serde_json::to_string(&state.wishlist)?,
        };
        Ok(json)
    }
}
