//! Owned, single-writer collection of one entity type.
//!
//! A table component creates one store from the seed collection and is the
//! only writer. The store never touches other collections.

use super::{Entity, RecordFilter, RecordId, StoreError};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Store initialised with the entity's seed collection.
    pub fn seeded() -> Self {
        Self::new(T::seed())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.find(id).is_some()
    }

    fn not_found(id: &RecordId) -> StoreError {
        StoreError::NotFound {
            entity: T::element_name(),
            id: id.clone(),
        }
    }

    fn next_id(&self) -> RecordId {
        loop {
            let id = RecordId::generate(T::ID_PREFIX);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append `record` as a new entry under a freshly generated id.
    ///
    /// Whatever id the record carried is replaced.
    pub fn add(&mut self, mut record: T, today: NaiveDate) -> RecordId {
        let id = self.next_id();
        record.set_id(id.clone());
        record.on_create(today);
        self.items.push(record);
        id
    }

    /// Replace the record with the same id, keeping its position.
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;
        *slot = record;
        Ok(())
    }

    /// Remove exactly the record with `id`, unless the entity refuses.
    pub fn remove(&mut self, id: &RecordId) -> Result<T, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(reason) = self.items[position].delete_blocker() {
            return Err(StoreError::DeleteBlocked {
                entity: T::element_name(),
                id: id.clone(),
                reason,
            });
        }
        Ok(self.items.remove(position))
    }

    /// Run `f` on the record with `id`.
    pub fn modify<R>(&mut self, id: &RecordId, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(f(record))
    }

    /// Records admitted by `filter`, in store order.
    pub fn filtered<F: RecordFilter<T>>(&self, filter: &F) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;
    use crate::domain::a002_category::aggregate::Category;
    use crate::domain::common::{date, TextFilter};

    fn store() -> EntityStore<Category> {
        EntityStore::seeded()
    }

    #[test]
    fn test_add_assigns_fresh_id_and_appends() {
        let mut store = store();
        let before: Vec<RecordId> = store.items().iter().map(|c| c.id.clone()).collect();

        let mut draft = Category::empty();
        draft.name = "Jardin".into();
        let id = store.add(draft, date(2024, 5, 1));

        assert!(!id.is_empty());
        assert!(!before.contains(&id));
        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.items().last().map(|c| &c.id), Some(&id));
    }

    #[test]
    fn test_update_keeps_position_and_length() {
        let mut store = store();
        let order_before: Vec<RecordId> = store.items().iter().map(|c| c.id.clone()).collect();

        let mut edited = store.items()[2].clone();
        edited.description = "Nouvelle description".into();
        store.update(edited.clone()).unwrap();

        let order_after: Vec<RecordId> = store.items().iter().map(|c| c.id.clone()).collect();
        assert_eq!(order_before, order_after);
        assert_eq!(store.items()[2], edited);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = store();
        let mut ghost = Category::empty();
        ghost.id = RecordId::new("ghost");
        assert!(matches!(
            store.update(ghost),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_remove_blocked_when_category_has_products() {
        let mut store = store();
        let len = store.len();
        let id = RecordId::new("1");
        assert!(matches!(
            store.remove(&id),
            Err(StoreError::DeleteBlocked { .. })
        ));
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_remove_removes_exactly_one() {
        let mut store = store();
        let id = RecordId::new("1");
        store.modify(&id, |c| c.product_count = 0).unwrap();
        let len = store.len();

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.id, id);
        assert_eq!(store.len(), len - 1);
        assert!(!store.contains(&id));
    }

    #[test]
    fn test_filtered_preserves_order() {
        let store = store();
        let hits = store.filtered(&TextFilter::new("o"));
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Electronics", "Accessories", "Clothing", "Home & Garden", "Sports & Outdoors", "Books"]
        );
        assert!(store.filtered(&TextFilter::new("zzz")).is_empty());
    }

    #[test]
    fn test_query_found_in_no_record_gives_empty_list() {
        let products = EntityStore::<Product>::seeded();
        assert!(products.filtered(&TextFilter::new("   ")).is_empty());
        assert!(products.filtered(&TextFilter::new("chevet ")).is_empty());

        let hits = products.filtered(&TextFilter::new("chevet"));
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Lampe de chevet"]);
        assert_eq!(products.filtered(&TextFilter::new("")).len(), products.len());
    }
}
