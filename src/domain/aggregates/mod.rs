//! Aggregates module
pub mod product;
pub mod cart;
pub mod order;
pub mod quote;
pub mod wishlist;

pub use product::Product;
pub use cart::{Cart, CartItem};
pub use order::{CheckoutPolicy, Order, OrderError, OrderStatus};
pub use quote::{QuoteLine, QuoteRequest, QuoteStatus};
pub use wishlist::Wishlist;
