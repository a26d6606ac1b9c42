//! Actions accepted by the store.

use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{Order, OrderStatus, Product, QuoteRequest, QuoteStatus};

/// Every state transition the store supports.
///
/// Serialized adjacently tagged, e.g.
/// `{"type": "ADD_TO_CART", "data": {"product": {..}, "size": "M", "quantity": 1}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Action {
    SetProducts(Vec<Product>),
    AddProduct(Product),
    UpdateProduct(Product),
    DeleteProduct { id: String },
    AddToCart { product: Product, #[serde(default)] size: String, quantity: i64 },
    UpdateCartItem { product_id: String, #[serde(default)] size: String, quantity: i64 },
    RemoveFromCart { product_id: String, #[serde(default)] size: String },
    ClearCart,
    /// `None` flips the current value.
    ToggleCart { #[serde(default)] open: Option<bool> },
    AddQuote(QuoteRequest),
    UpdateQuoteStatus { id: String, status: QuoteStatus },
    AddOrder(Order),
    UpdateOrderStatus { id: String, status: OrderStatus },
    ToggleWishlistItem { product_id: String },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetProducts(_) => "set_products",
            Self::AddProduct(_) => "add_product",
            Self::UpdateProduct(_) => "update_product",
            Self::DeleteProduct { .. } => "delete_product",
            Self::AddToCart { .. } => "add_to_cart",
            Self::UpdateCartItem { .. } => "update_cart_item",
            Self::RemoveFromCart { .. } => "remove_from_cart",
            Self::ClearCart => "clear_cart",
            Self::ToggleCart { .. } => "toggle_cart",
            Self::AddQuote(_) => "add_quote",
            Self::UpdateQuoteStatus { .. } => "update_quote_status",
            Self::AddOrder(_) => "add_order",
            Self::UpdateOrderStatus { .. } => "update_order_status",
            Self::ToggleWishlistItem { .. } => "toggle_wishlist_item",
        }
    }
}
