//! Promotion create/edit draft.

use super::{Discount, DiscountKind, Promotion, PromotionKind, PromotionStatus, PromotionType};
use crate::domain::common::RecordId;
use chrono::NaiveDate;

/// Date format of `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct PromotionDraft {
    pub title: String,
    pub description: String,
    pub promotion_type: PromotionType,
    pub discount_kind: DiscountKind,
    pub discount_value: String,
    pub code: String,
    pub image: String,
    pub start_date: String,
    pub end_date: String,
    pub status: PromotionStatus,
    pub usage_limit: String,
    pub min_order_amount: String,
}

impl Default for PromotionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            promotion_type: PromotionType::Code,
            discount_kind: DiscountKind::Percentage,
            discount_value: String::new(),
            code: String::new(),
            image: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: PromotionStatus::Inactive,
            usage_limit: String::new(),
            min_order_amount: String::new(),
        }
    }
}

impl From<&Promotion> for PromotionDraft {
    fn from(p: &Promotion) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            promotion_type: p.promotion_type(),
            discount_kind: p.discount.kind(),
            discount_value: p.discount.value().to_string(),
            code: p.kind.code().unwrap_or_default().to_string(),
            image: p.kind.image().unwrap_or_default().to_string(),
            start_date: p.start_date.format(DATE_INPUT_FORMAT).to_string(),
            end_date: p.end_date.format(DATE_INPUT_FORMAT).to_string(),
            status: p.status,
            usage_limit: p.usage_limit.map(|v| v.to_string()).unwrap_or_default(),
            min_order_amount: p.min_order_amount.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

/// Banner image used when the form leaves the image field blank.
pub fn placeholder_banner(title: &str) -> String {
    format!(
        "/placeholder.svg?height=200&width=400&query={}",
        urlencoding::encode(title)
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

impl PromotionDraft {
    /// Whether the "activate immediately" switch is on.
    pub fn is_active(&self) -> bool {
        self.status == PromotionStatus::Active
    }

    pub fn set_active(&mut self, active: bool) {
        self.status = if active {
            PromotionStatus::Active
        } else {
            PromotionStatus::Inactive
        };
    }

    /// `None` when the title, a non-zero discount or either date is missing.
    ///
    /// Editing keeps the id, usage count and creation date of `existing`.
    pub fn submit(&self, existing: Option<&Promotion>, today: NaiveDate) -> Option<Promotion> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let value = self.discount_value.trim().parse::<f64>().ok()?;
        if !value.is_finite() || value == 0.0 {
            return None;
        }
        let start_date = parse_date(&self.start_date)?;
        let end_date = parse_date(&self.end_date)?;

        let kind = match self.promotion_type {
            PromotionType::Banner => PromotionKind::Banner {
                image: match self.image.trim() {
                    "" => placeholder_banner(title),
                    img => img.to_string(),
                },
            },
            PromotionType::Code => PromotionKind::Code {
                code: self.code.trim().to_uppercase(),
            },
            PromotionType::Sale => PromotionKind::Sale,
        };

        Some(Promotion {
            id: existing.map(|p| p.id.clone()).unwrap_or_else(|| RecordId::new("")),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            kind,
            discount: Discount::new(self.discount_kind, value),
            start_date,
            end_date,
            status: self.status,
            usage_count: existing.map(|p| p.usage_count).unwrap_or(0),
            usage_limit: self.usage_limit.trim().parse::<u32>().ok().filter(|v| *v > 0),
            min_order_amount: self
                .min_order_amount
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0),
            created_date: existing.map(|p| p.created_date).unwrap_or(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::date;

    fn valid() -> PromotionDraft {
        PromotionDraft {
            title: "Rentrée".into(),
            discount_value: "20".into(),
            code: "rentree20".into(),
            start_date: "2024-09-01".into(),
            end_date: "2024-09-30".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        let today = date(2024, 8, 1);
        assert!(valid().submit(None, today).is_some());

        let mut d = valid();
        d.title.clear();
        assert!(d.submit(None, today).is_none());

        let mut d = valid();
        d.discount_value = "0".into();
        assert!(d.submit(None, today).is_none());

        let mut d = valid();
        d.start_date.clear();
        assert!(d.submit(None, today).is_none());

        let mut d = valid();
        d.end_date = "30/09/2024".into();
        assert!(d.submit(None, today).is_none());
    }

    #[test]
    fn test_code_is_uppercased_and_only_kept_for_code_type() {
        let today = date(2024, 8, 1);
        let saved = valid().submit(None, today).unwrap();
        assert_eq!(saved.kind, PromotionKind::Code { code: "RENTREE20".into() });

        let mut sale = valid();
        sale.promotion_type = PromotionType::Sale;
        let saved = sale.submit(None, today).unwrap();
        assert_eq!(saved.kind, PromotionKind::Sale);
        assert_eq!(saved.kind.code(), None);
    }

    #[test]
    fn test_banner_gets_placeholder_image() {
        let mut d = valid();
        d.promotion_type = PromotionType::Banner;
        let saved = d.submit(None, date(2024, 8, 1)).unwrap();
        assert_eq!(
            saved.kind.image(),
            Some("/placeholder.svg?height=200&width=400&query=Rentr%C3%A9e")
        );
    }

    #[test]
    fn test_empty_or_zero_limits_become_none() {
        let mut d = valid();
        d.usage_limit = "0".into();
        d.min_order_amount = "".into();
        let saved = d.submit(None, date(2024, 8, 1)).unwrap();
        assert_eq!(saved.usage_limit, None);
        assert_eq!(saved.min_order_amount, None);

        d.usage_limit = "250".into();
        d.min_order_amount = "30.5".into();
        let saved = d.submit(None, date(2024, 8, 1)).unwrap();
        assert_eq!(saved.usage_limit, Some(250));
        assert_eq!(saved.min_order_amount, Some(30.5));
    }

    #[test]
    fn test_edit_keeps_usage_and_creation_date() {
        let original = super::super::seed::promotions().remove(1);
        let mut d = PromotionDraft::from(&original);
        assert_eq!(d.start_date, "2024-01-01");
        d.discount_kind = DiscountKind::Fixed;
        d.discount_value = "5".into();

        let saved = d.submit(Some(&original), date(2025, 1, 1)).unwrap();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.usage_count, 89);
        assert_eq!(saved.created_date, original.created_date);
        assert_eq!(saved.discount, Discount::Fixed(5.0));
        assert_eq!(saved.kind, original.kind);
        assert_eq!(saved.usage_limit, Some(1000));
    }

    #[test]
    fn test_activation_switch() {
        let mut d = valid();
        assert!(!d.is_active());
        d.set_active(true);
        assert_eq!(d.status, PromotionStatus::Active);
        d.set_active(false);
        assert_eq!(d.status, PromotionStatus::Inactive);
    }
}
