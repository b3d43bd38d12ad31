//! Collection pagination.
//!
//! Inventory list endpoints return a single-page envelope
//! `{ "<plural>": [ … ] }`. Each resource module declares its envelope as
//! a [`Collection`] type; [`InventoryClient::list`] fetches one envelope
//! and unwraps it into a [`Page`]. Transport and decode failures
//! propagate as errors — a failed fetch never looks like an empty page.
//!
//! [`InventoryClient::list`]: crate::client::InventoryClient::list

use serde::de::DeserializeOwned;

/// A list-response envelope that unwraps to a typed item slice.
pub trait Collection: DeserializeOwned {
    type Item;

    /// Unwrap the envelope into its items.
    fn into_items(self) -> Vec<Self::Item>;
}

/// One page of a collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// `true` iff the extracted slice is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consume the page, yielding its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
