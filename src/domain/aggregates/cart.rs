//! Cart Aggregate

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::domain::value_objects::{line_total, positive_quantity};
use rust_decimal::Decimal;

/// One line of the cart, keyed by `(product.id, size)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    #[serde(default)]
    pub size: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal { line_total(self.product.price, self.quantity) }

    fn matches(&self, product_id: &str, size: &str) -> bool {
        self.product.id == product_id && self.size == size
    }
}

/// Cart lines with at most one entry per `(product id, size)` and only
/// positive quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn get(&self, product_id: &str, size: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, size))
    }

    /// Adds `quantity` to the line for `(product.id, size)`, creating it if needed.
    /// Non-positive quantities leave the cart untouched.
    pub fn add_item(&mut self, product: Product, size: String, quantity: i64) {
        let Some(quantity) = positive_quantity(quantity) else { return };
        if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&product.id, &size)) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem { product, size, quantity });
        }
    }

    /// Sets the line's quantity absolutely; zero or below drops the line.
    pub fn set_quantity(&mut self, product_id: &str, size: &str, quantity: i64) {
        match positive_quantity(quantity) {
            None => self.remove_item(product_id, size),
            Some(quantity) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.matches(product_id, size)) {
                    item.quantity = quantity;
                }
            }
        }
    }

    pub fn remove_item(&mut self, product_id: &str, size: &str) {
        self.items.retain(|i| !i.matches(product_id, size));
    }

    pub fn clear(&mut self) { self.items.clear(); }

    /// Deep copy of the lines, independent of later cart or catalog edits.
    pub fn snapshot(&self) -> Vec<CartItem> { self.items.clone() }
}
