//! Mirrors store slices to a [`KeyValueStore`].
//!
//! [`Synchronizer::rehydrate`] seeds a fresh [`Store`] once at startup;
//! [`Synchronizer::spawn`] then subscribes to the store and rewrites every
//! slice that changes. Unreadable entries count as absent and failed writes
//! are only logged: the in-memory state stays authoritative either way.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use super::{KeyValueStore, Slice};
use crate::catalog::default_catalog;
use crate::domain::aggregates::{CartItem, Order, Product, QuoteRequest};
use crate::store::{Action, Store, StoreState};

/// What [`Synchronizer::rehydrate`] found in durable storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rehydration {
    /// `true` when the products key was absent and the default catalog was written.
    pub seeded_catalog: bool,
    pub products: usize,
    pub cart_items: usize,
    pub quotes: usize,
    pub orders: usize,
    pub wishlist: usize,
}

pub struct Synchronizer<K> {
    kv: Arc<K>,
    default_catalog: Vec<Product>,
}

impl<K: KeyValueStore> Synchronizer<K> {
    pub fn new(kv: K) -> Self { Self::from_shared(Arc::new(kv)) }

    pub fn from_shared(kv: Arc<K>) -> Self { Self { kv, default_catalog: default_catalog() } }

    /// Replaces the catalog used when no products have been persisted yet.
    pub fn with_default_catalog(mut self, products: Vec<Product>) -> Self {
        self.default_catalog = products;
        self
    }

    pub fn backend(&self) -> &K { &self.kv }

    /// Loads every persisted slice into `store`.
    ///
    /// Stored cart lines, quotes, orders and wishlist ids are replayed
    /// through the same actions a live session would dispatch, so duplicate
    /// or non-positive cart lines are merged or dropped exactly as they
    /// would be live.
    pub async fn rehydrate(&self, store: &Store) -> Rehydration {
        let mut report = Rehydration::default();

        match self.read::<Vec<Product>>(Slice::Products).await {
            Some(products) => {
                report.products = products.len();
                store.dispatch(Action::SetProducts(products));
            }
            None => {
                report.products = self.default_catalog.len();
                report.seeded_catalog = true;
                store.dispatch(Action::SetProducts(self.default_catalog.clone()));
                self.write(Slice::Products, &store.state()).await;
            }
        }

        if let Some(cart) = self.read::<Vec<CartItem>>(Slice::Cart).await {
            report.cart_items = cart.len();
            for item in cart {
                store.dispatch(Action::AddToCart { product: item.product, size: item.size, quantity: i64::from(item.quantity) });
            }
        }

        if let Some(quotes) = self.read::<Vec<QuoteRequest>>(Slice::Quotes).await {
            report.quotes = quotes.len();
            for quote in quotes {
                store.dispatch(Action::AddQuote(quote));
            }
        }

        if let Some(orders) = self.read::<Vec<Order>>(Slice::Orders).await {
            report.orders = orders.len();
            for order in orders {
                store.dispatch(Action::AddOrder(order));
            }
        }

        if let Some(ids) = self.read::<Vec<String>>(Slice::Wishlist).await {
            report.wishlist = ids.len();
            for product_id in ids {
                // A repeated id would otherwise toggle itself back out.
                store.transact(|state| {
                    let actions = if state.in_wishlist(&product_id) { vec![] } else { vec![Action::ToggleWishlistItem { product_id }] };
                    (actions, ())
                });
            }
        }

        tracing::info!(
            seeded_catalog = report.seeded_catalog,
            products = report.products,
            cart_items = report.cart_items,
            quotes = report.quotes,
            orders = report.orders,
            wishlist = report.wishlist,
            "store rehydrated"
        );
        report
    }

    /// Starts the background writer. Only changes made after this call are
    /// written; the task ends once the store is dropped and its last change
    /// has been flushed.
    pub fn spawn(self, store: &Store) -> JoinHandle<()> {
        let mut rx = store.subscribe();
        let mut last = Arc::clone(&rx.borrow_and_update());
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let next = Arc::clone(&rx.borrow_and_update());
                self.flush(&last, &next).await;
                last = next;
            }
            tracing::debug!("store closed; persistence sync stopped");
        })
    }

    /// Writes every slice that differs between `previous` and `next`.
    /// Returns the number of slices written successfully.
    pub async fn flush(&self, previous: &StoreState, next: &StoreState) -> usize {
        let mut written = 0;
        for slice in Slice::ALL {
            if slice.differs(previous, next) && self.write(slice, next).await {
                written += 1;
            }
        }
        written
    }

    async fn read<T: DeserializeOwned>(&self, slice: Slice) -> Option<T> {
        let raw = match self.kv.get(slice.key()).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = slice.key(), error = %e, "failed to read slice; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = slice.key(), error = %e, "malformed slice; treating as absent");
                None
            }
        }
    }

    async fn write(&self, slice: Slice, state: &StoreState) -> bool {
        let result = match slice.encode(state) {
            Ok(json) => self.kv.set(slice.key(), json).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                tracing::debug!(key = slice.key(), "slice written");
                true
            }
            Err(e) => {
                tracing::warn!(key = slice.key(), error = %e, "failed to write slice");
                false
            }
        }
    }
}
