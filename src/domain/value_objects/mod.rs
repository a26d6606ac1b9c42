//! Value Objects for the storefront

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an order is paid for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Cod => "cod", Self::Card => "card" }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Contact and shipping fields captured at checkout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Converts a requested quantity into a stored one.
///
/// Returns `None` for zero or negative requests; values beyond `u32::MAX`
/// saturate.
pub fn positive_quantity(requested: i64) -> Option<u32> {
    if requested <= 0 { return None; }
    Some(u32::try_from(requested).unwrap_or(u32::MAX))
}

/// `price × quantity` for a single line, saturating at the `Decimal` bounds.
pub fn line_total(price: Decimal, quantity: u32) -> Decimal { price.saturating_mul(Decimal::from(quantity)) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_quantity() {
        assert_eq!(positive_quantity(3), Some(3));
        assert_eq!(positive_quantity(0), None);
        assert_eq!(positive_quantity(-2), None);
        assert_eq!(positive_quantity(i64::MAX), Some(u32::MAX));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(Decimal::new(1250, 2), 4), Decimal::new(50, 0));
    }

    #[test]
    fn test_line_total_saturates() {
        assert_eq!(line_total(Decimal::MAX, 2), Decimal::MAX);
        assert_eq!(line_total(Decimal::MIN, u32::MAX), Decimal::MIN);
    }

    #[test]
    fn test_payment_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"cod\"");
        let card: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(card, PaymentMethod::Card);
    }
}
