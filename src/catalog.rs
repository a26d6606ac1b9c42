//! Built-in catalog used to seed a store that has never been persisted.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::aggregates::Product;

const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

fn listed(timestamp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(timestamp, 0).single().unwrap_or_default()
}

struct Entry {
    id: &'static str,
    name: &'static str,
    price: Decimal,
    original_price: Option<Decimal>,
    category: &'static str,
    description: &'static str,
    sized: bool,
    tags: &'static [&'static str],
    wholesale: bool,
    listed_at: i64,
}

pub fn default_catalog() -> Vec<Product> {
    let entries = [
        Entry {
            id: "mw-abaya-001", name: "Classic Black Abaya", price: Decimal::new(8900, 2), original_price: None,
            category: "abayas", description: "Flowing nida abaya with hidden snap closure and wide sleeves.",
            sized: true, tags: &["bestseller", "essentials"], wholesale: true, listed_at: 1_704_067_200,
        },
        Entry {
            id: "mw-abaya-002", name: "Embroidered Open Abaya", price: Decimal::new(12900, 2), original_price: Some(Decimal::new(15900, 2)),
            category: "abayas", description: "Open-front crepe abaya with tonal floral embroidery along the hem.",
            sized: true, tags: &["sale", "occasion"], wholesale: true, listed_at: 1_706_745_600,
        },
        Entry {
            id: "mw-hijab-001", name: "Premium Jersey Hijab", price: Decimal::new(1800, 2), original_price: None,
            category: "hijabs", description: "Soft stretch jersey that holds its shape without pins.",
            sized: false, tags: &["bestseller", "essentials"], wholesale: true, listed_at: 1_704_067_200,
        },
        Entry {
            id: "mw-hijab-002", name: "Chiffon Hijab Set", price: Decimal::new(3200, 2), original_price: Some(Decimal::new(4000, 2)),
            category: "hijabs", description: "Three lightweight chiffon wraps in seasonal neutrals.",
            sized: false, tags: &["sale", "new-arrival"], wholesale: false, listed_at: 1_709_251_200,
        },
        Entry {
            id: "mw-dress-001", name: "Tiered Maxi Dress", price: Decimal::new(7400, 2), original_price: None,
            category: "dresses", description: "Full-length cotton maxi with long sleeves and tiered skirt.",
            sized: true, tags: &["new-arrival"], wholesale: false, listed_at: 1_709_251_200,
        },
        Entry {
            id: "mw-khimar-001", name: "Two-Layer Khimar", price: Decimal::new(4500, 2), original_price: None,
            category: "khimars", description: "Elbow-length khimar with a breathable double layer.",
            sized: false, tags: &["essentials"], wholesale: true, listed_at: 1_706_745_600,
        },
        Entry {
            id: "mw-set-001", name: "Prayer Dress Set", price: Decimal::new(5500, 2), original_price: Some(Decimal::new(6500, 2)),
            category: "sets", description: "One-piece prayer garment with matching pouch.",
            sized: false, tags: &["sale", "gift"], wholesale: true, listed_at: 1_704_067_200,
        },
    ];

    entries
        .into_iter()
        .map(|e| Product {
            id: e.id.to_string(),
            name: e.name.to_string(),
            price: e.price,
            original_price: e.original_price,
            category: e.category.to_string(),
            description: e.description.to_string(),
            image: format!("/images/products/{}.jpg", e.id),
            sizes: if e.sized { SIZES.iter().map(|s| s.to_string()).collect() } else { vec![] },
            tags: e.tags.iter().map(|t| t.to_string()).collect(),
            in_stock: true,
            is_wholesale: e.wholesale,
            created_at: listed(e.listed_at),
        })
        .collect()
}
