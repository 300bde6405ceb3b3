//! # Saved Fixes
//!
//! [`FixStore`] is the user-curated list of fixes kept across sessions. It is an
//! ordered collection, newest first, backed by a single [`Storage`] entry.
//!
//! - Loading never fails: a missing entry, unreadable storage or malformed JSON
//!   all start an empty collection (the problem is logged).
//! - Every mutation writes the whole collection back before returning. A failed
//!   write leaves the in-memory collection as it was.
//! - Uniqueness by id is the caller's job; [`FixStore::toggle`] is the
//!   save/unsave operation that keeps it.

use crate::error::Result;
use crate::model::{FixId, SavedFix};
use crate::store::{Storage, SAVED_FIXES_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Saved,
    Unsaved,
}

pub struct FixStore<S: Storage> {
    items: Vec<SavedFix>,
    storage: S,
}

impl<S: Storage> FixStore<S> {
    pub fn load(storage: S) -> Self {
        let items = match storage.get(SAVED_FIXES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<SavedFix>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Failed to parse saved fixes, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read saved fixes, starting empty: {}", e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} saved fixes", items.len());
        Self { items, storage }
    }

    /// Insert at the front. Does not check for an existing id.
    pub fn add(&mut self, item: SavedFix) -> Result<()> {
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item);
        next.extend(self.items.iter().cloned());
        self.commit(next)
    }

    /// Remove the fix with `id`; absent ids are a no-op (but still persist).
    pub fn remove(&mut self, id: &FixId) -> Result<()> {
        let next = self
            .items
            .iter()
            .filter(|fix| &fix.id != id)
            .cloned()
            .collect();
        self.commit(next)
    }

    pub fn toggle(&mut self, item: &SavedFix) -> Result<Toggled> {
        if self.contains(&item.id) {
            self.remove(&item.id)?;
            Ok(Toggled::Unsaved)
        } else {
            self.add(item.clone())?;
            Ok(Toggled::Saved)
        }
    }

    pub fn find_by_id(&self, id: &FixId) -> Option<&SavedFix> {
        self.items.iter().find(|fix| &fix.id == id)
    }

    pub fn contains(&self, id: &FixId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// 1-based positional lookup, as shown in listings.
    pub fn get(&self, position: usize) -> Option<&SavedFix> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn items(&self) -> &[SavedFix] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Write `next` to storage, then make it the current collection.
    fn commit(&mut self, next: Vec<SavedFix>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(SAVED_FIXES_KEY, &raw)?;
        self.items = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixError;
    use crate::store::memory::fixtures::fix;
    use crate::store::memory::InMemoryStorage;

    fn ids<S: Storage>(store: &FixStore<S>) -> Vec<FixId> {
        store.items().iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn load_without_entry_is_empty() {
        let store = FixStore::load(InMemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn load_with_invalid_json_is_empty() {
        let storage = InMemoryStorage::new().with_entry(SAVED_FIXES_KEY, "{not json");
        let store = FixStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn load_with_wrong_shape_is_empty() {
        let storage =
            InMemoryStorage::new().with_entry(SAVED_FIXES_KEY, r#"{"id":"1","query":"q"}"#);
        assert!(FixStore::load(storage).is_empty());

        let storage = InMemoryStorage::new().with_entry(SAVED_FIXES_KEY, r#"[{"id":"1"}]"#);
        assert!(FixStore::load(storage).is_empty());
    }

    #[test]
    fn add_inserts_at_front() {
        let mut store = FixStore::load(InMemoryStorage::new());
        let a = fix("a");
        let b = fix("b");
        store.add(a.clone()).unwrap();
        store.add(b.clone()).unwrap();
        assert_eq!(ids(&store), vec![b.id, a.id]);
    }

    #[test]
    fn find_by_id_after_add_returns_equal_item() {
        let mut store = FixStore::load(InMemoryStorage::new());
        let a = fix("a");
        store.add(a.clone()).unwrap();
        assert_eq!(store.find_by_id(&a.id), Some(&a));
        assert_eq!(store.find_by_id(&FixId::from("missing")), None);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut store = FixStore::load(InMemoryStorage::new());
        store.add(fix("a")).unwrap();
        store.remove(&FixId::from("missing")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_membership_and_order() {
        let mut store = FixStore::load(InMemoryStorage::new());
        for tag in ["a", "b", "c"] {
            store.add(fix(tag)).unwrap();
        }
        let before = ids(&store);

        let middle = store.items()[1].clone();
        assert_eq!(store.toggle(&middle).unwrap(), Toggled::Unsaved);
        assert_eq!(store.len(), 2);
        assert_eq!(store.toggle(&middle).unwrap(), Toggled::Saved);

        // The toggled item comes back at the front; the others keep their order.
        let after = ids(&store);
        assert_eq!(after[0], middle.id);
        let others_before: Vec<_> = before.iter().filter(|id| **id != middle.id).collect();
        let others_after: Vec<_> = after.iter().filter(|id| **id != middle.id).collect();
        assert_eq!(others_before, others_after);

        let fresh = fix("d");
        store.toggle(&fresh).unwrap();
        store.toggle(&fresh).unwrap();
        assert_eq!(ids(&store), after);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = FixStore::load(InMemoryStorage::new());
        let a = fix("a");
        store.add(a.clone()).unwrap();
        let raw = store.storage().get(SAVED_FIXES_KEY).unwrap().unwrap();
        assert!(raw.contains(a.id.as_str()));

        store.remove(&a.id).unwrap();
        let raw = store.storage().get(SAVED_FIXES_KEY).unwrap().unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn persistence_round_trip_keeps_ids_and_order() {
        let mut store = FixStore::load(InMemoryStorage::new());
        for tag in ["a", "b", "c"] {
            store.add(fix(tag)).unwrap();
        }
        let raw = store.storage().get(SAVED_FIXES_KEY).unwrap().unwrap();

        let reloaded = FixStore::load(InMemoryStorage::new().with_entry(SAVED_FIXES_KEY, &raw));
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn write_failures_surface_to_caller() {
        let mut store = FixStore::load(InMemoryStorage::new().failing_writes());
        let a = fix("a");
        assert!(matches!(store.add(a.clone()), Err(FixError::Store(_))));
        assert!(store.is_empty());
        assert!(!store.contains(&a.id));
        assert!(matches!(store.toggle(&a), Err(FixError::Store(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_remove_keeps_the_item() {
        let a = fix("a");
        let raw = serde_json::to_string(&vec![a.clone()]).unwrap();
        let storage = InMemoryStorage::new()
            .with_entry(SAVED_FIXES_KEY, &raw)
            .failing_writes();
        let mut store = FixStore::load(storage);

        assert!(store.remove(&a.id).is_err());
        assert_eq!(store.find_by_id(&a.id), Some(&a));
        assert!(matches!(store.toggle(&a), Err(FixError::Store(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_is_one_based() {
        let mut store = FixStore::load(InMemoryStorage::new());
        let a = fix("a");
        store.add(a.clone()).unwrap();
        assert_eq!(store.get(1), Some(&a));
        assert_eq!(store.get(0), None);
        assert_eq!(store.get(2), None);
    }
}
