//! SelectionSet - Selected Artworks Keyed by Id
//!
//! Backed by a `LinkedHashMap` so the selected-records panel can list entries in
//! the order they were selected.

use hashlink::LinkedHashMap;

use crate::domain::artwork::{Artwork, ArtworkId};

/// Set of selected records, unique by id
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: LinkedHashMap<ArtworkId, Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.items.contains_key(&id)
    }

    /// Insert a record; returns false if it was already selected
    pub fn insert(&mut self, artwork: Artwork) -> bool {
        if self.items.contains_key(&artwork.id) {
            return false;
        }
        self.items.insert(artwork.id, artwork);
        true
    }

    pub fn remove(&mut self, id: ArtworkId) -> Option<Artwork> {
        self.items.remove(&id)
    }

    /// Flip membership of a record; returns true if it is now selected
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.items.remove(&artwork.id).is_some() {
            false
        } else {
            self.items.insert(artwork.id, artwork.clone());
            true
        }
    }

    /// Discard the current contents and select exactly `artworks`
    pub fn replace_with<'a>(&mut self, artworks: impl IntoIterator<Item = &'a Artwork>) {
        self.items.clear();
        for artwork in artworks {
            self.items.insert(artwork.id, artwork.clone());
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected records in selection order
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.values()
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.items.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut set = SelectionSet::new();
        let a = Artwork::new(1, "a");
        set.insert(Artwork::new(2, "b"));
        assert!(set.toggle(&a));
        assert!(!set.toggle(&a));
        assert_eq!(set.ids(), vec![ArtworkId(2)]);
    }

    #[test]
    fn test_insert_is_unique_by_id() {
        let mut set = SelectionSet::new();
        assert!(set.insert(Artwork::new(7, "first")));
        assert!(!set.insert(Artwork::new(7, "renamed")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().map(|a| a.title()), Some("first"));
    }

    #[test]
    fn test_replace_with_preserves_order() {
        let mut set = SelectionSet::new();
        set.insert(Artwork::new(99, "old"));
        let page = [Artwork::new(3, "c"), Artwork::new(1, "a"), Artwork::new(2, "b")];
        set.replace_with(&page);
        assert_eq!(set.ids(), vec![ArtworkId(3), ArtworkId(1), ArtworkId(2)]);
        assert!(!set.contains(ArtworkId(99)));
    }
}
