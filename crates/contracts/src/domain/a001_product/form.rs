//! Product create/edit draft.

use super::Product;
use crate::domain::common::RecordId;

/// Working copy of the product form. Numeric fields stay textual until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub rating: String,
    pub image: String,
    pub is_favorite: bool,
}

impl From<&Product> for ProductDraft {
    fn from(p: &Product) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            price: p.price.to_string(),
            category: p.category.clone(),
            stock: p.stock.to_string(),
            rating: p.rating.to_string(),
            image: p.image.clone(),
            is_favorite: p.is_favorite,
        }
    }
}

/// Image used when the form leaves the image field blank.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "/placeholder.svg?height=40&width=40&query={}",
        urlencoding::encode(title)
    )
}

impl ProductDraft {
    /// Build the record to save, or `None` when title, category or a
    /// non-zero price is missing.
    ///
    /// Editing keeps the id of `existing`. Unparseable stock counts as 0 and
    /// the rating is clamped to 0..=5.
    pub fn submit(&self, existing: Option<&Product>) -> Option<Product> {
        let title = self.title.trim();
        let category = self.category.trim();
        let price = self.price.trim().parse::<f64>().unwrap_or(0.0);
        if title.is_empty() || category.is_empty() || !price.is_finite() || price <= 0.0 {
            return None;
        }

        let stock = self.stock.trim().parse::<u32>().unwrap_or(0);
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, 5.0))
            .unwrap_or(0.0);
        let image = match self.image.trim() {
            "" => placeholder_image(title),
            img => img.to_string(),
        };

        Some(Product {
            id: existing.map(|p| p.id.clone()).unwrap_or_else(|| RecordId::new("")),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            price,
            rating,
            image,
            category: category.to_string(),
            stock,
            is_favorite: self.is_favorite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{date, EntityStore};

    fn draft(title: &str, category: &str, price: &str) -> ProductDraft {
        ProductDraft {
            title: title.into(),
            category: category.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_requires_title_category_and_price() {
        assert!(draft("", "Electronics", "10").submit(None).is_none());
        assert!(draft("Test", "", "10").submit(None).is_none());
        assert!(draft("Test", "Electronics", "").submit(None).is_none());
        assert!(draft("Test", "Electronics", "0").submit(None).is_none());
        assert!(draft("Test", "Electronics", "abc").submit(None).is_none());
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut store: EntityStore<Product> = EntityStore::seeded();
        let existing: Vec<RecordId> = store.items().iter().map(|p| p.id.clone()).collect();

        let record = draft("Test", "Electronics", "10").submit(None).unwrap();
        let id = store.add(record, date(2024, 4, 1));

        assert!(!id.is_empty());
        assert!(!existing.contains(&id));
        let added = store.items().last().unwrap();
        assert_eq!(added.title, "Test");
        assert_eq!(added.category, "Electronics");
        assert_eq!(added.price, 10.0);
        assert_eq!(added.stock, 0);
        assert_eq!(added.rating, 0.0);
        assert!(!added.is_favorite);
    }

    #[test]
    fn test_rating_is_clamped() {
        let mut d = draft("Test", "Books", "5");
        d.rating = "7.5".into();
        assert_eq!(d.submit(None).unwrap().rating, 5.0);
        d.rating = "-1".into();
        assert_eq!(d.submit(None).unwrap().rating, 0.0);
        d.rating = "4.2".into();
        assert_eq!(d.submit(None).unwrap().rating, 4.2);
    }

    #[test]
    fn test_blank_image_gets_placeholder() {
        let record = draft("Lampe à poser", "Décoration", "25").submit(None).unwrap();
        assert_eq!(
            record.image,
            "/placeholder.svg?height=40&width=40&query=Lampe%20%C3%A0%20poser"
        );
    }

    #[test]
    fn test_edit_round_trip_preserves_record() {
        let mut store: EntityStore<Product> = EntityStore::seeded();
        let ids_before: Vec<RecordId> = store.items().iter().map(|p| p.id.clone()).collect();
        let original = store.items()[1].clone();

        let mut edit = ProductDraft::from(&original);
        edit.stock = "3".into();
        let updated = edit.submit(Some(&original)).unwrap();
        store.update(updated).unwrap();

        let ids_after: Vec<RecordId> = store.items().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids_before, ids_after);
        let saved = &store.items()[1];
        assert_eq!(saved.stock, 3);
        assert_eq!(saved.title, original.title);
        assert_eq!(saved.price, original.price);
        assert_eq!(saved.rating, original.rating);
        assert_eq!(saved.image, original.image);
        assert_eq!(saved.is_favorite, original.is_favorite);
    }
}
