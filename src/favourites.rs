//! Favourite recipe ids as explicit, caller-owned state.
//!
//! Only the id strings are kept; records are re-fetched through
//! [`crate::fetch_recipe_details`] when a favourite is opened. The JSON
//! form is a bare array of strings, matching what display layers persist
//! in their key-value store.

use log::warn;
use serde::{Deserialize, Serialize};

/// Ordered set of favourited recipe ids. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favourites {
    ids: Vec<String>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted id list. Unreadable input yields the empty list
    /// rather than an error, so a corrupted store never blocks the page.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(favourites) => favourites,
            Err(e) => {
                warn!("Discarding unreadable favourites list: {e}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Flip the favourite state of an id; returns whether it is now
    /// favourited.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn add(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|known| known != id);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favourites = Favourites::new();
        assert!(favourites.toggle("52772"));
        assert!(favourites.contains("52772"));
        assert!(!favourites.toggle("52772"));
        assert!(favourites.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favourites = Favourites::new();
        favourites.add("716429");
        favourites.add("716429");
        assert_eq!(favourites.len(), 1);
    }

    #[test]
    fn test_json_round_trip_is_a_bare_array() {
        let mut favourites = Favourites::new();
        favourites.add("52772");
        favourites.add("ninja-Beef-Stew");

        let json = favourites.to_json().unwrap();
        assert_eq!(json, r#"["52772","ninja-Beef-Stew"]"#);
        assert_eq!(Favourites::from_json(&json), favourites);
    }

    #[test]
    fn test_unreadable_json_decodes_as_empty() {
        assert!(Favourites::from_json("not json").is_empty());
        assert!(Favourites::from_json("{\"ids\":[]}").is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut favourites = Favourites::new();
        favourites.add("3");
        favourites.add("1");
        favourites.add("2");
        assert_eq!(favourites.ids(), ["3", "1", "2"]);
    }
}
