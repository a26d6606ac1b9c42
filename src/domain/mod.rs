//! Storefront domain types
pub mod aggregates;
pub mod value_objects;
