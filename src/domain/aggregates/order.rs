//! Order Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::{Cart, CartItem};
use crate::domain::value_objects::{CustomerDetails, PaymentMethod};
use crate::store::derived::cart_total;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus { #[default] Pending, Confirmed, Shipped, Delivered }

/// A placed purchase. `items` is a detached copy of the cart at checkout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub customer: CustomerDetails,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Shipping and payment surcharges applied when an order is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutPolicy {
    pub shipping_flat_rate: Decimal,
    /// Subtotals at or above this ship free.
    pub free_shipping_threshold: Decimal,
    pub cod_fee: Decimal,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self { shipping_flat_rate: Decimal::new(15, 0), free_shipping_threshold: Decimal::new(200, 0), cod_fee: Decimal::new(5, 0) }
    }
}

impl CheckoutPolicy {
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal >= self.free_shipping_threshold { Decimal::ZERO } else { self.shipping_flat_rate }
    }

    pub fn fee_for(&self, method: PaymentMethod) -> Decimal {
        match method { PaymentMethod::Cod => self.cod_fee, PaymentMethod::Card => Decimal::ZERO }
    }
}

impl Order {
    /// Prices the current cart into a new pending order.
    pub fn place(cart: &Cart, customer: CustomerDetails, payment_method: PaymentMethod, policy: &CheckoutPolicy) -> Result<Self, OrderError> {
        if cart.is_empty() { return Err(OrderError::EmptyCart); }
        let items = cart.snapshot();
        let subtotal = cart_total(&items);
        let shipping = policy.shipping_for(subtotal);
        let fee = policy.fee_for(payment_method);
        Ok(Self {
            id: format!("ORD-{}", Uuid::now_v7().simple()),
            items, customer, subtotal, shipping, fee,
            total: subtotal.saturating_add(shipping).saturating_add(fee),
            payment_method, status: OrderStatus::Pending, created_at: Utc::now(),
        })
    }

    pub fn item_count(&self) -> u32 { self.items.iter().map(|i| i.quantity).fold(0, u32::saturating_add) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
}
