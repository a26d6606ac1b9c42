//! Product Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry. The store only ever holds read copies of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Pre-sale price shown struck through; at least `price` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_wholesale: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

fn default_in_stock() -> bool { true }

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            id: id.into(), name: name.into(), price, original_price: None, category: category.into(),
            description: String::new(), image: String::new(), sizes: vec![], tags: vec![],
            in_stock: true, is_wholesale: false, created_at: Utc::now(),
        }
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_original_price(mut self, original: Decimal) -> Self {
        self.original_price = Some(original);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool { self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) }

    pub fn is_on_sale(&self) -> bool { self.original_price.is_some_and(|o| o > self.price) }

    /// Markdown from `original_price` in whole percent. `None` when not on
    /// sale or when the figure is out of range.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price.filter(|o| *o > self.price && !o.is_zero())?;
        let markdown = original.checked_sub(self.price)?.checked_div(original)?;
        markdown.checked_mul(Decimal::ONE_HUNDRED)?.round().to_u32()
    }
}
