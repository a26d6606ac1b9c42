//! ModestWear Storefront Store
//!
//! Client-side shopping state for a modest-fashion storefront.
//!
//! ## Features
//! - Product catalog cache with merchandising tags
//! - Cart with per-size line merging
//! - Wishlist
//! - Wholesale quote requests
//! - Orders with checkout pricing
//! - Durable local persistence with rehydration at startup

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod store;

use thiserror::Error;

pub use config::Config;
pub use persistence::{FileStore, KeyValueStore, MemoryStore, Synchronizer};
pub use store::{Action, Store, StoreState};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Order(#[from] domain::aggregates::OrderError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Quote not found")]
    QuoteNotFound,
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
