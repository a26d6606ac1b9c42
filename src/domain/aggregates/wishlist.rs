//! Wishlist: an insertion-ordered set of product ids.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn new() -> Self { Self::default() }

    pub fn ids(&self) -> &[String] { &self.ids }
    pub fn len(&self) -> usize { self.ids.len() }
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
    pub fn contains(&self, product_id: &str) -> bool { self.ids.iter().any(|id| id == product_id) }

    /// Removes the id if present, otherwise appends it.
    pub fn toggle(&mut self, product_id: String) {
        if self.contains(&product_id) {
            self.ids.retain(|id| *id != product_id);
        } else {
            self.ids.push(product_id);
        }
    }
}
