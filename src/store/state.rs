//! Aggregate store state and read-side selectors.

use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{Cart, Order, Product, QuoteRequest, Wishlist};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Cart,
    pub quotes: Vec<QuoteRequest>,
    pub orders: Vec<Order>,
    pub wishlist: Wishlist,
    pub is_cart_open: bool,
}

impl StoreState {
    pub fn product(&self, id: &str) -> Option<&Product> { self.products.iter().find(|p| p.id == id) }

    /// Catalog entries passing `filter`, in catalog order.
    pub fn products_matching<'a>(&'a self, filter: &'a ProductFilter) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    pub fn in_wishlist(&self, product_id: &str) -> bool { self.wishlist.contains(product_id) }

    /// Wishlisted products still present in the catalog, in wishlist order.
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.wishlist.ids().iter().filter_map(|id| self.product(id)).collect()
    }
}

/// Catalog query; unset fields match everything. Tag and category compare
/// case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub on_sale: Option<bool>,
}

impl ProductFilter {
    pub fn tagged(tag: impl Into<String>) -> Self { Self { tag: Some(tag.into()), ..Self::default() } }

    pub fn in_category(category: impl Into<String>) -> Self { Self { category: Some(category.into()), ..Self::default() } }

    pub fn matches(&self, product: &Product) -> bool {
        self.tag.as_deref().map_or(true, |t| product.has_tag(t))
            && self.category.as_deref().map_or(true, |c| product.category.eq_ignore_ascii_case(c))
            && self.on_sale.map_or(true, |sale| product.is_on_sale() == sale)
    }
}
