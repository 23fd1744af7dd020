use crate::domain::common::{Entity, RecordId, StatusTone};
use serde::{Deserialize, Serialize};

/// Stock below this value (and above zero) is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Categories offered by the product form.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Accessories",
    "Clothing",
    "Home & Garden",
    "Sports & Outdoors",
    "Books",
    "Toys & Games",
    "Meubles",
    "Décoration",
];

// ============================================================================
// Aggregate
// ============================================================================

/// Catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
    pub category: String,
    pub stock: u32,
    pub is_favorite: bool,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::of(self.stock)
    }
}

impl Entity for Product {
    const ID_PREFIX: &'static str = "";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }

    fn seed() -> Vec<Self> {
        super::seed::products()
    }

    fn element_name() -> &'static str {
        "product"
    }
}

// ============================================================================
// Stock level
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockLevel {
    pub fn of(stock: u32) -> Self {
        match stock {
            0 => StockLevel::OutOfStock,
            s if s < LOW_STOCK_THRESHOLD => StockLevel::LowStock,
            _ => StockLevel::InStock,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "En rupture de stock",
            StockLevel::LowStock => "Stock faible",
            StockLevel::InStock => "En stock",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            StockLevel::OutOfStock => StatusTone::Error,
            StockLevel::LowStock => StatusTone::Warning,
            StockLevel::InStock => StatusTone::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{EntityStore, TextFilter};

    #[test]
    fn test_stock_level_boundaries() {
        assert_eq!(StockLevel::of(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::of(1), StockLevel::LowStock);
        assert_eq!(StockLevel::of(9), StockLevel::LowStock);
        assert_eq!(StockLevel::of(10), StockLevel::InStock);
        assert_eq!(StockLevel::of(60), StockLevel::InStock);
    }

    #[test]
    fn test_stock_level_labels() {
        assert_eq!(StockLevel::of(5).display_name(), "Stock faible");
        assert_eq!(StockLevel::of(5).tone(), StatusTone::Warning);
        assert_eq!(StockLevel::of(0).tone(), StatusTone::Error);
    }

    #[test]
    fn test_search_by_title_and_category() {
        let store: EntityStore<Product> = EntityStore::seeded();

        let hits = store.filtered(&TextFilter::new("lampe"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Lampe de chevet");

        let hits = store.filtered(&TextFilter::new("DÉCO"));
        assert_eq!(hits.len(), 1);

        assert_eq!(store.filtered(&TextFilter::new("meubles")).len(), 4);
        assert!(store.filtered(&TextFilter::new("xyz-absent")).is_empty());
    }

    #[test]
    fn test_every_seed_category_is_offered_by_the_form() {
        for product in super::super::seed::products() {
            assert!(PRODUCT_CATEGORIES.contains(&product.category.as_str()));
        }
    }
}
