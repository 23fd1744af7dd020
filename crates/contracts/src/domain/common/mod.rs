//! Common types and traits for all entities

pub mod entity;
pub mod error;
pub mod filter;
pub mod record_id;
pub mod status_tone;
pub mod store;

// Re-exports
pub use entity::Entity;
pub use error::StoreError;
pub use filter::{matches_query, Choice, RecordFilter, TextFilter, CHOICE_ALL};
pub use record_id::RecordId;
pub use status_tone::StatusTone;
pub use store::EntityStore;

use chrono::NaiveDate;

/// Current calendar date (UTC), used to stamp created/shipped/delivered dates.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Seed date literal. An impossible date falls back to `NaiveDate::default()`,
/// which `test_seed_dates_are_real` rejects.
pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a002_category, a003_order, a004_user, a005_promotion};

    #[test]
    fn test_date_falls_back_on_impossible_literal() {
        assert_eq!(date(2024, 2, 30), NaiveDate::default());
        assert_ne!(date(2024, 2, 29), NaiveDate::default());
    }

    #[test]
    fn test_seed_dates_are_real() {
        let mut dates = Vec::new();
        for c in a002_category::seed::categories() {
            dates.push(c.created_at);
        }
        for o in a003_order::seed::orders() {
            dates.push(o.order_date);
            dates.extend(o.shipped_date);
            dates.extend(o.delivered_date);
        }
        for u in a004_user::seed::users() {
            dates.push(u.registration_date);
            dates.push(u.last_login_date);
            dates.extend(u.orders.iter().map(|o| o.order_date));
        }
        for p in a005_promotion::seed::promotions() {
            dates.extend([p.start_date, p.end_date, p.created_date]);
        }
        assert!(!dates.is_empty());
        assert!(dates.iter().all(|d| *d != NaiveDate::default()));
    }
}
