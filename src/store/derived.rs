//! Values computed from the cart on every read. Nothing here is cached.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::aggregates::CartItem;

/// Σ price × quantity, saturating at the `Decimal` bounds.
pub fn cart_total(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Σ quantity.
pub fn cart_count(items: &[CartItem]) -> u32 {
    items.iter().map(|i| i.quantity).fold(0, u32::saturating_add)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub cart_total: Decimal,
    pub cart_count: u32,
}

impl CartTotals {
    pub fn of(items: &[CartItem]) -> Self {
        Self { cart_total: cart_total(items), cart_count: cart_count(items) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{Cart, Product};

    #[test]
    fn test_totals_match_independent_sum() {
        let mut cart = Cart::new();
        let prices = [(1999, 2), (4500, 2), (1000, 0)];
        for (n, (cents, scale)) in prices.iter().enumerate() {
            let p = Product::new(format!("p{n}"), "Item", Decimal::new(*cents, *scale), "misc");
            cart.add_item(p.clone(), "S".into(), n as i64 + 1);
            cart.add_item(p, "M".into(), 2);
        }
        let expected_total: Decimal = cart.items().iter().map(|i| i.product.price * Decimal::from(i.quantity)).sum();
        let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart_total(cart.items()), expected_total);
        assert_eq!(cart_count(cart.items()), expected_count);
        assert_eq!(expected_count, 12);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_panicking() {
        let mut cart = Cart::new();
        cart.add_item(Product::new("big", "Couture Abaya", Decimal::MAX, "abayas"), "M".into(), 2);
        cart.add_item(Product::new("p2", "Hijab Pin", Decimal::ONE, "accessories"), String::new(), 1);
        assert_eq!(cart_total(cart.items()), Decimal::MAX);
        assert_eq!(CartTotals::of(cart.items()).cart_count, 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        assert_eq!(CartTotals::of(&[]), CartTotals { cart_total: Decimal::ZERO, cart_count: 0 });
    }
}
