//! Reducer-driven state container.
//!
//! [`Store`] owns the current [`StoreState`] and is the only place it can be
//! mutated. Every dispatch runs the pure [`reduce`] while holding the
//! store's writer lock, so dispatches never interleave. Settled states are
//! published on a `tokio::sync::watch` channel and subscribers are woken
//! only when the new state differs from the previous one.

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;

use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use tokio::sync::watch;

pub use action::Action;
pub use derived::{cart_count, cart_total, CartTotals};
pub use reducer::{reduce, replay};
pub use state::{ProductFilter, StoreState};

#[derive(Debug)]
pub struct Store {
    tx: watch::Sender<Arc<StoreState>>,
    writer: Mutex<()>,
}

impl Default for Store {
    fn default() -> Self { Self::new() }
}

impl Store {
    pub fn new() -> Self { Self::with_state(StoreState::default()) }

    pub fn with_state(state: StoreState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(state));
        Self { tx, writer: Mutex::new(()) }
    }

    /// The latest settled state.
    pub fn state(&self) -> Arc<StoreState> { Arc::clone(&self.tx.borrow()) }

    /// Applies one action. Returns whether the state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        self.transact(|_| (vec![action], ())).1
    }

    /// Reads the settled state and applies the actions derived from it as a
    /// single step; no other dispatch can land in between.
    ///
    /// Returns the caller's value and whether the state changed.
    pub fn transact<T, F>(&self, decide: F) -> (T, bool)
    where
        F: FnOnce(&StoreState) -> (Vec<Action>, T),
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.state();
        let (actions, value) = decide(current.as_ref());
        if actions.is_empty() {
            return (value, false);
        }
        let kinds: Vec<&'static str> = actions.iter().map(Action::kind).collect();
        let next = actions.into_iter().fold(StoreState::clone(current.as_ref()), reduce);
        let changed = next != *current;
        tracing::debug!(actions = ?kinds, changed, "dispatched");
        if changed {
            self.tx.send_replace(Arc::new(next));
        }
        (value, changed)
    }

    /// Change feed of settled states, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<StoreState>> { self.tx.subscribe() }

    pub fn cart_total(&self) -> Decimal { cart_total(self.state().cart.items()) }
    pub fn cart_count(&self) -> u32 { cart_count(self.state().cart.items()) }
    pub fn cart_totals(&self) -> CartTotals { CartTotals::of(self.state().cart.items()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Product;

    fn p1() -> Product { Product::new("P1", "Satin Abaya", Decimal::new(65, 0), "abayas") }
    fn p2() -> Product { Product::new("P2", "Under-scarf", Decimal::new(8, 0), "hijabs") }

    #[test]
    fn test_dispatch_and_derived_values() {
        let store = Store::new();
        assert!(store.dispatch(Action::AddToCart { product: p1(), size: "M".into(), quantity: 2 }));
        assert!(store.dispatch(Action::AddToCart { product: p1(), size: "M".into(), quantity: 3 }));
        let state = store.state();
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.items()[0].quantity, 5);
        assert_eq!(store.cart_total(), Decimal::new(325, 0));
        assert_eq!(store.cart_count(), 5);
    }

    #[test]
    fn test_noop_dispatch_reports_unchanged() {
        let store = Store::new();
        let before = store.state();
        assert!(!store.dispatch(Action::RemoveFromCart { product_id: "P1".into(), size: "M".into() }));
        assert!(Arc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn test_transact_reads_then_dispatches() {
        let store = Store::new();
        store.dispatch(Action::AddToCart { product: p1(), size: "S".into(), quantity: 1 });
        store.dispatch(Action::AddToCart { product: p2(), size: String::new(), quantity: 4 });
        let (moved, changed) = store.transact(|state| {
            let count = cart_count(state.cart.items());
            (vec![Action::ClearCart], count)
        });
        assert!(changed);
        assert_eq!(moved, 5);
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_transact_without_actions_returns_value() {
        let store = Store::new();
        let before = store.state();
        let (seen, changed) = store.transact(|state| (vec![], state.cart.len()));
        assert_eq!(seen, 0);
        assert!(!changed);
        assert!(Arc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn test_concurrent_dispatches_all_land() {
        let store = Arc::new(Store::new());
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.dispatch(Action::AddToCart { product: p2(), size: String::new(), quantity: 1 });
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(store.cart_count(), 200);
    }

    #[test]
    fn test_huge_price_totals_do_not_panic() {
        let store = Store::new();
        let couture = Product::new("P9", "Couture Abaya", Decimal::MAX, "abayas");
        store.dispatch(Action::AddToCart { product: couture, size: "M".into(), quantity: 2 });
        assert_eq!(store.cart_total(), Decimal::MAX);
        assert!(store.dispatch(Action::ClearCart));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_only() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.dispatch(Action::DeleteProduct { id: "nope".into() });
        assert!(!rx.has_changed().unwrap());
        store.dispatch(Action::ToggleWishlistItem { product_id: "P1".into() });
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().wishlist.contains("P1"));
    }
}
