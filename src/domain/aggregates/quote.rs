//! Wholesale quote requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus { #[default] Pending, Processed, Completed }

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_id: String,
    pub quantity: u32,
}

/// A wholesale inquiry. Only `status` changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub region: String,
    /// Free-form volume band, e.g. "100-500 units".
    pub volume: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lines: Vec<QuoteLine>,
    #[serde(default)]
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn total_units(&self) -> u32 { self.lines.iter().map(|l| l.quantity).fold(0, u32::saturating_add) }
}
