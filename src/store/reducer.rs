//! The store's transition function.
//!
//! `reduce` is pure and total: it performs no I/O and yields a defined next
//! state for every action, including updates aimed at ids that do not exist
//! (those leave the state as it was). Id-keyed updates touch every entry
//! carrying that id.

use super::action::Action;
use super::state::StoreState;

pub fn reduce(mut state: StoreState, action: Action) -> StoreState {
    match action {
        Action::SetProducts(products) => state.products = products,
        Action::AddProduct(product) => state.products.push(product),
        Action::UpdateProduct(product) => {
            for existing in state.products.iter_mut().filter(|p| p.id == product.id) {
                existing.clone_from(&product);
            }
        }
        Action::DeleteProduct { id } => state.products.retain(|p| p.id != id),
        Action::AddToCart { product, size, quantity } => state.cart.add_item(product, size, quantity),
        Action::UpdateCartItem { product_id, size, quantity } => state.cart.set_quantity(&product_id, &size, quantity),
        Action::RemoveFromCart { product_id, size } => state.cart.remove_item(&product_id, &size),
        Action::ClearCart => state.cart.clear(),
        Action::ToggleCart { open } => state.is_cart_open = open.unwrap_or(!state.is_cart_open),
        Action::AddQuote(quote) => state.quotes.push(quote),
        Action::UpdateQuoteStatus { id, status } => {
            state.quotes.iter_mut().filter(|q| q.id == id).for_each(|q| q.status = status);
        }
        Action::AddOrder(order) => state.orders.push(order),
        Action::UpdateOrderStatus { id, status } => {
            state.orders.iter_mut().filter(|o| o.id == id).for_each(|o| o.status = status);
        }
        Action::ToggleWishlistItem { product_id } => state.wishlist.toggle(product_id),
    }
    state
}

/// Folds an action log over the empty state.
pub fn replay<I: IntoIterator<Item = Action>>(actions: I) -> StoreState {
    actions.into_iter().fold(StoreState::default(), reduce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{Order, OrderStatus, Product, QuoteRequest, QuoteStatus};
    use crate::domain::value_objects::{CustomerDetails, PaymentMethod};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn p1() -> Product { Product::new("P1", "Crepe Abaya", Decimal::new(80, 0), "abayas").with_sizes(["S", "M", "L"]) }
    fn p2() -> Product { Product::new("P2", "Modal Hijab", Decimal::new(15, 0), "hijabs").with_sizes(["L"]) }

    fn add(product: Product, size: &str, quantity: i64) -> Action {
        Action::AddToCart { product, size: size.into(), quantity }
    }

    fn quote(id: &str) -> QuoteRequest {
        QuoteRequest {
            id: id.into(), business_name: "Noor Boutique".into(), contact_name: "Amina".into(), email: "amina@noor.example".into(),
            phone: String::new(), region: "GCC".into(), volume: "100-500".into(), message: String::new(), lines: vec![],
            status: QuoteStatus::Pending, created_at: Utc::now(),
        }
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.into(), items: vec![], customer: CustomerDetails::default(), subtotal: Decimal::ZERO, shipping: Decimal::ZERO,
            fee: Decimal::ZERO, total: Decimal::ZERO, payment_method: PaymentMethod::Card, status: OrderStatus::Pending, created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_to_cart_merges_same_product_and_size() {
        let state = replay([add(p1(), "M", 2), add(p1(), "M", 3)]);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_update_cart_item_zero_removes() {
        let state = replay([add(p1(), "M", 2), add(p1(), "M", 1), add(p2(), "L", 1)]);
        let state = reduce(state, Action::UpdateCartItem { product_id: "P1".into(), size: "M".into(), quantity: 0 });
        assert!(state.cart.get("P1", "M").is_none());
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_update_cart_item_sets_absolute_quantity() {
        let state = replay([add(p1(), "M", 4)]);
        let state = reduce(state, Action::UpdateCartItem { product_id: "P1".into(), size: "M".into(), quantity: 2 });
        assert_eq!(state.cart.get("P1", "M").map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_remove_from_cart_keeps_other_lines() {
        let state = replay([add(p1(), "M", 1), add(p2(), "L", 2)]);
        let state = reduce(state, Action::RemoveFromCart { product_id: "P1".into(), size: "M".into() });
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.items()[0].product.id, "P2");
        assert_eq!(state.cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_clear_cart() {
        let state = replay([add(p1(), "M", 1), add(p2(), "L", 2), Action::ClearCart]);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_toggle_cart() {
        let state = replay([Action::ToggleCart { open: None }]);
        assert!(state.is_cart_open);
        let state = reduce(state, Action::ToggleCart { open: None });
        assert!(!state.is_cart_open);
        let state = reduce(state, Action::ToggleCart { open: Some(true) });
        let state = reduce(state, Action::ToggleCart { open: Some(true) });
        assert!(state.is_cart_open);
    }

    #[test]
    fn test_wishlist_toggle_twice_is_identity() {
        let state = replay([Action::ToggleWishlistItem { product_id: "p1".into() }]);
        assert_eq!(state.wishlist.ids(), ["p1"]);
        let state = reduce(state, Action::ToggleWishlistItem { product_id: "p1".into() });
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_product_crud() {
        let state = replay([Action::SetProducts(vec![p1()]), Action::AddProduct(p2())]);
        assert_eq!(state.products.len(), 2);

        let mut renamed = p1();
        renamed.name = "Crepe Abaya (Black)".into();
        let state = reduce(state, Action::UpdateProduct(renamed));
        assert_eq!(state.product("P1").map(|p| p.name.as_str()), Some("Crepe Abaya (Black)"));

        let state = reduce(state, Action::AddProduct(p2()));
        let state = reduce(state, Action::DeleteProduct { id: "P2".into() });
        assert_eq!(state.products.len(), 1);
        let again = reduce(state.clone(), Action::DeleteProduct { id: "P2".into() });
        assert_eq!(again, state);
    }

    #[test]
    fn test_status_transitions() {
        let state = replay([Action::AddQuote(quote("Q1")), Action::AddOrder(order("O1"))]);
        let state = reduce(state, Action::UpdateQuoteStatus { id: "Q1".into(), status: QuoteStatus::Completed });
        let state = reduce(state, Action::UpdateOrderStatus { id: "O1".into(), status: OrderStatus::Shipped });
        assert_eq!(state.quotes[0].status, QuoteStatus::Completed);
        assert_eq!(state.orders[0].status, OrderStatus::Shipped);
    }

    #[test]
    fn test_actions_on_missing_ids_are_noops() {
        let base = replay([
            Action::SetProducts(vec![p1()]),
            add(p1(), "M", 1),
            Action::AddQuote(quote("Q1")),
            Action::AddOrder(order("O1")),
        ]);
        let noops = [
            Action::RemoveFromCart { product_id: "nope".into(), size: "M".into() },
            Action::UpdateCartItem { product_id: "P1".into(), size: "XXL".into(), quantity: 3 },
            Action::UpdateQuoteStatus { id: "nope".into(), status: QuoteStatus::Processed },
            Action::UpdateOrderStatus { id: "nope".into(), status: OrderStatus::Delivered },
            Action::DeleteProduct { id: "nope".into() },
            Action::UpdateProduct(Product::new("nope", "Ghost", Decimal::ONE, "none")),
        ];
        for action in noops {
            let kind = action.kind();
            assert_eq!(reduce(base.clone(), action), base, "{kind} changed state");
        }
    }

    #[test]
    fn test_scenario_merge_then_totals() {
        let state = replay([add(p1(), "M", 2), add(p1(), "M", 3)]);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(crate::store::derived::cart_total(state.cart.items()), Decimal::new(400, 0));
        assert_eq!(crate::store::derived::cart_count(state.cart.items()), 5);
    }
}
