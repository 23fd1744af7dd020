pub mod aggregate;
pub mod form;
pub mod seed;

pub use aggregate::{Product, StockLevel, LOW_STOCK_THRESHOLD, PRODUCT_CATEGORIES};
pub use form::ProductDraft;
