//! Category create/edit draft.

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            is_active: c.is_active,
        }
    }
}

impl CategoryDraft {
    /// `None` when the name is blank. Editing keeps id, product count and
    /// creation date of `existing`; a new category gets `today`.
    pub fn submit(&self, existing: Option<&Category>, today: chrono::NaiveDate) -> Option<Category> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let mut record = existing.cloned().unwrap_or_else(|| {
            let mut blank = Category::empty();
            blank.created_at = today;
            blank
        });
        record.name = name.to_string();
        record.description = self.description.trim().to_string();
        record.is_active = self.is_active;
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::date;

    #[test]
    fn test_blank_name_is_ignored() {
        let draft = CategoryDraft {
            name: "   ".into(),
            ..Default::default()
        };
        assert!(draft.submit(None, date(2024, 4, 1)).is_none());
    }

    #[test]
    fn test_edit_keeps_identity_and_creation_date() {
        let original = super::super::seed::categories().remove(0);
        let mut draft = CategoryDraft::from(&original);
        draft.description = "Gadgets".into();
        draft.is_active = false;

        let saved = draft.submit(Some(&original), date(2025, 1, 1)).unwrap();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.created_at, original.created_at);
        assert_eq!(saved.product_count, 45);
        assert_eq!(saved.description, "Gadgets");
        assert!(!saved.is_active);
    }

    #[test]
    fn test_new_category_starts_empty() {
        let draft = CategoryDraft {
            name: "Jardin".into(),
            ..Default::default()
        };
        let saved = draft.submit(None, date(2024, 4, 1)).unwrap();
        assert_eq!(saved.product_count, 0);
        assert!(saved.is_active);
        assert_eq!(saved.created_at, date(2024, 4, 1));
    }
}
