use crate::domain::common::{Entity, RecordId, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub product_count: u32,
    pub is_active: bool,
    pub created_at: NaiveDate,
}

impl Category {
    /// Blank active category, the starting point of the create form.
    pub fn empty() -> Self {
        Self {
            id: RecordId::new(""),
            name: String::new(),
            description: String::new(),
            product_count: 0,
            is_active: true,
            created_at: NaiveDate::default(),
        }
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Only a category without products may be deleted.
    pub fn can_delete(&self) -> bool {
        self.product_count == 0
    }

    pub fn status_tone(&self) -> StatusTone {
        if self.is_active {
            StatusTone::Success
        } else {
            StatusTone::Neutral
        }
    }
}

impl Entity for Category {
    const ID_PREFIX: &'static str = "";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn seed() -> Vec<Self> {
        super::seed::categories()
    }

    fn element_name() -> &'static str {
        "category"
    }

    fn on_create(&mut self, today: NaiveDate) {
        self.created_at = today;
    }

    fn delete_blocker(&self) -> Option<String> {
        (!self.can_delete()).then(|| {
            format!(
                "{} produit(s) sont encore rattachés à cette catégorie",
                self.product_count
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{date, EntityStore, StoreError};

    #[test]
    fn test_toggle_active_twice_is_identity() {
        let mut category = super::super::seed::categories().remove(5);
        let before = category.clone();
        category.toggle_active();
        assert!(category.is_active);
        category.toggle_active();
        assert_eq!(category, before);
    }

    #[test]
    fn test_delete_blocker_only_when_products_attached() {
        let mut category = Category::empty();
        assert!(category.delete_blocker().is_none());
        category.product_count = 2;
        assert!(category.delete_blocker().is_some());
    }

    #[test]
    fn test_delete_offered_only_for_empty_categories() {
        let mut category = Category::empty();
        assert!(category.can_delete());
        category.product_count = 1;
        assert!(!category.can_delete());
        for seeded in super::super::seed::categories() {
            assert_eq!(seeded.can_delete(), seeded.product_count == 0);
            assert_eq!(seeded.can_delete(), seeded.delete_blocker().is_none());
        }
    }

    #[test]
    fn test_every_seeded_category_with_products_is_protected() {
        let mut store: EntityStore<Category> = EntityStore::seeded();
        let ids: Vec<RecordId> = store.items().iter().map(|c| c.id.clone()).collect();
        for id in &ids {
            assert!(matches!(
                store.remove(id),
                Err(StoreError::DeleteBlocked { .. })
            ));
        }
        assert_eq!(store.len(), ids.len());
    }

    #[test]
    fn test_add_stamps_creation_date() {
        let mut store: EntityStore<Category> = EntityStore::seeded();
        let mut category = Category::empty();
        category.name = "Jardin".into();
        let id = store.add(category, date(2024, 6, 2));
        assert_eq!(store.find(&id).map(|c| c.created_at), Some(date(2024, 6, 2)));
    }
}
