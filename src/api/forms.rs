//! Request bodies validated before they become store actions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::aggregates::{Product, QuoteLine, QuoteRequest, QuoteStatus};
use crate::domain::value_objects::{CustomerDetails, PaymentMethod};

fn default_true() -> bool { true }

/// Admin product editor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_pricing"))]
pub struct ProductForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_wholesale: bool,
}

fn validate_pricing(form: &ProductForm) -> Result<(), ValidationError> {
    if form.price <= Decimal::ZERO {
        return Err(ValidationError::new("price_not_positive"));
    }
    if form.original_price.is_some_and(|original| original < form.price) {
        return Err(ValidationError::new("original_price_below_price"));
    }
    Ok(())
}

impl ProductForm {
    pub fn into_product(self, id: String, created_at: DateTime<Utc>) -> Product {
        Product {
            id, name: self.name, price: self.price, original_price: self.original_price, category: self.category,
            description: self.description, image: self.image, sizes: self.sizes, tags: self.tags,
            in_stock: self.in_stock, is_wholesale: self.is_wholesale, created_at,
        }
    }
}

pub fn new_product_id() -> String { format!("mw-{}", Uuid::now_v7().simple()) }

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 5, max = 32))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn into_parts(self) -> (CustomerDetails, PaymentMethod) {
        let customer = CustomerDetails { name: self.name, email: self.email, phone: self.phone, address: self.address, city: self.city, notes: self.notes };
        (customer, self.payment_method)
    }
}

/// Wholesale inquiry form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    #[validate(length(min = 1))]
    pub business_name: String,
    #[validate(length(min = 1))]
    pub contact_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1))]
    pub region: String,
    #[validate(length(min = 1))]
    pub volume: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub message: String,
    #[serde(default)]
    pub lines: Vec<QuoteLine>,
}

impl QuoteForm {
    pub fn into_quote(self) -> QuoteRequest {
        QuoteRequest {
            id: format!("QT-{}", Uuid::now_v7().simple()),
            business_name: self.business_name, contact_name: self.contact_name, email: self.email, phone: self.phone,
            region: self.region, volume: self.volume, message: self.message,
            lines: self.lines.into_iter().filter(|l| l.quantity > 0).collect(),
            status: QuoteStatus::Pending, created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusForm<S> {
    pub status: S,
}
