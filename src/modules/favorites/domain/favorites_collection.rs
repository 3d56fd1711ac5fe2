use super::favorite_item::FavoriteItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Favorited titles in insertion order, unique by `id`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<FavoriteItem>", into = "Vec<FavoriteItem>")]
pub struct FavoritesCollection {
    items: Vec<FavoriteItem>,
}

impl FavoritesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&FavoriteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Remove `item.id` if present, otherwise append the snapshot
    pub fn toggle(&mut self, item: FavoriteItem) -> Toggle {
        let before = self.items.len();
        self.items.retain(|existing| existing.id != item.id);
        if self.items.len() < before {
            Toggle::Removed
        } else {
            self.items.push(item);
            Toggle::Added
        }
    }

    /// Non-mutating toggle
    pub fn toggled(&self, item: FavoriteItem) -> (Self, Toggle) {
        let mut next = self.clone();
        let outcome = next.toggle(item);
        (next, outcome)
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<FavoriteItem>> for FavoritesCollection {
    /// Later duplicates of an id are dropped so the collection stays keyed
    fn from(items: Vec<FavoriteItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();
        Self { items }
    }
}

impl From<FavoritesCollection> for Vec<FavoriteItem> {
    fn from(collection: FavoritesCollection) -> Self {
        collection.items
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a FavoriteItem;
    type IntoIter = std::slice::Iter<'a, FavoriteItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> FavoriteItem {
        FavoriteItem {
            id,
            title: format!("Movie {}", id),
            image: "/placeholder.jpg".to_string(),
            rating: 50,
            release_date: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoritesCollection::new();
        assert_eq!(favorites.toggle(item(1)), Toggle::Added);
        assert!(favorites.contains(1));
        assert_eq!(favorites.toggle(item(1)), Toggle::Removed);
        assert!(!favorites.contains(1));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let original = FavoritesCollection::from(vec![item(1), item(2), item(3)]);
        for id in [2, 9] {
            let (once, _) = original.toggled(item(id));
            let (twice, _) = once.toggled(item(id));

            let mut before = original.ids();
            let mut after = twice.ids();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_removal_matches_by_id_not_snapshot() {
        let mut favorites = FavoritesCollection::from(vec![item(1)]);
        let mut changed = item(1);
        changed.title = "Renamed upstream".to_string();
        changed.rating = 99;

        assert_eq!(favorites.toggle(changed), Toggle::Removed);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_from_vec_drops_duplicate_ids() {
        let mut dup = item(1);
        dup.title = "Duplicate".to_string();
        let favorites = FavoritesCollection::from(vec![item(1), item(2), dup]);

        assert_eq!(favorites.ids(), vec![1, 2]);
        assert_eq!(favorites.get(1).unwrap().title, "Movie 1");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let favorites = FavoritesCollection::from(vec![item(1)]);
        let json = serde_json::to_string(&favorites).unwrap();
        assert!(json.starts_with('['));

        let back: FavoritesCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, favorites);
    }
}
