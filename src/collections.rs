//! Cart and wishlist collaborator interface.
//!
//! The cart and wishlist live in the UI's state container. This crate only
//! needs to read them (membership and counts for badges), so the container
//! is described by the [`ItemCollection`] trait and left to the caller.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use storefront_data::collections::{item_count_label, ItemCollection};
//!
//! let mut wishlist: HashSet<String> = HashSet::new();
//! wishlist.toggle("prod-1");
//! wishlist.toggle("prod-2");
//!
//! assert!(wishlist.contains("prod-1"));
//! assert_eq!(item_count_label(&wishlist), "2 items");
//! ```

use std::collections::HashSet;

use crate::format::pluralize_items;

/// A set of product ids held by a cart or wishlist.
pub trait ItemCollection {
    /// Returns `true` if the product is in the collection.
    fn contains(&self, id: &str) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a product. Adding a present product is a no-op.
    fn add(&mut self, id: &str);

    /// Removes a product. Removing an absent product is a no-op.
    fn remove(&mut self, id: &str);

    /// Adds the product if absent, removes it otherwise.
    ///
    /// Returns `true` if the product is now in the collection.
    fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }
}

impl ItemCollection for HashSet<String> {
    fn contains(&self, id: &str) -> bool {
        Self::contains(self, id)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn add(&mut self, id: &str) {
        self.insert(id.to_string());
    }

    fn remove(&mut self, id: &str) {
        Self::remove(self, id);
    }
}

/// Renders the collection size for a badge or header (e.g., `"3 items"`).
#[must_use]
pub fn item_count_label(collection: &impl ItemCollection) -> String {
    pluralize_items(u64::try_from(collection.len()).unwrap_or(u64::MAX))
}
