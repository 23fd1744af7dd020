//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a003_order--list"`) and `data-page-category` with one of the
//! constants below. The `--` separator keeps the entity name searchable from
//! the DOM inspector.

/// List of records with search, filters and row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview page composed of widgets.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Shell-level pages (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--detail"));
    }
}
