use crate::domain::common::{matches_query, Choice, Entity, RecordFilter, RecordId, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Kind / type
// ============================================================================

/// What the promotion is. A code only exists on `Code`, an image only on `Banner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionKind {
    Banner { image: String },
    #[serde(rename = "discount_code")]
    Code { code: String },
    Sale,
}

impl PromotionKind {
    pub fn promotion_type(&self) -> PromotionType {
        match self {
            PromotionKind::Banner { .. } => PromotionType::Banner,
            PromotionKind::Code { .. } => PromotionType::Code,
            PromotionKind::Sale => PromotionType::Sale,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            PromotionKind::Code { code } => Some(code),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            PromotionKind::Banner { image } => Some(image),
            _ => None,
        }
    }
}

/// Field-less discriminant of [`PromotionKind`], used by selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionType {
    Banner,
    Code,
    Sale,
}

impl PromotionType {
    pub fn code(&self) -> &'static str {
        match self {
            PromotionType::Banner => "banner",
            PromotionType::Code => "discount_code",
            PromotionType::Sale => "sale",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionType::Banner => "Bannière",
            PromotionType::Code => "Code promo",
            PromotionType::Sale => "Vente",
        }
    }

    pub fn all() -> Vec<PromotionType> {
        vec![PromotionType::Banner, PromotionType::Code, PromotionType::Sale]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "banner" => Some(PromotionType::Banner),
            "discount_code" => Some(PromotionType::Code),
            "sale" => Some(PromotionType::Sale),
            _ => None,
        }
    }
}

// ============================================================================
// Discount
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discountType", content = "discountValue", rename_all = "snake_case")]
pub enum Discount {
    Percentage(f64),
    Fixed(f64),
}

impl Discount {
    pub fn new(kind: DiscountKind, value: f64) -> Self {
        match kind {
            DiscountKind::Percentage => Discount::Percentage(value),
            DiscountKind::Fixed => Discount::Fixed(value),
        }
    }

    pub fn kind(&self) -> DiscountKind {
        match self {
            Discount::Percentage(_) => DiscountKind::Percentage,
            Discount::Fixed(_) => DiscountKind::Fixed,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Discount::Percentage(v) | Discount::Fixed(v) => *v,
        }
    }

    /// "25%" or "$50".
    pub fn label(&self) -> String {
        match self {
            Discount::Percentage(v) => format!("{}%", v),
            Discount::Fixed(v) => format!("${}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

impl DiscountKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "Pourcentage (%)",
            DiscountKind::Fixed => "Montant fixe ($)",
        }
    }

    pub fn all() -> Vec<DiscountKind> {
        vec![DiscountKind::Percentage, DiscountKind::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "percentage" => Some(DiscountKind::Percentage),
            "fixed" => Some(DiscountKind::Fixed),
            _ => None,
        }
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    Active,
    Inactive,
    Scheduled,
    Expired,
}

impl PromotionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PromotionStatus::Active => "active",
            PromotionStatus::Inactive => "inactive",
            PromotionStatus::Scheduled => "scheduled",
            PromotionStatus::Expired => "expired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionStatus::Active => "Actif",
            PromotionStatus::Inactive => "Inactif",
            PromotionStatus::Scheduled => "Programmé",
            PromotionStatus::Expired => "Expiré",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PromotionStatus::Active => StatusTone::Success,
            PromotionStatus::Inactive => StatusTone::Neutral,
            PromotionStatus::Scheduled => StatusTone::Info,
            PromotionStatus::Expired => StatusTone::Error,
        }
    }

    pub fn all() -> Vec<PromotionStatus> {
        vec![
            PromotionStatus::Active,
            PromotionStatus::Inactive,
            PromotionStatus::Scheduled,
            PromotionStatus::Expired,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(PromotionStatus::Active),
            "inactive" => Some(PromotionStatus::Inactive),
            "scheduled" => Some(PromotionStatus::Scheduled),
            "expired" => Some(PromotionStatus::Expired),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Marketing campaign: banner, discount code or sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: PromotionKind,
    #[serde(flatten)]
    pub discount: Discount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PromotionStatus,
    pub usage_count: u32,
    pub usage_limit: Option<u32>,
    pub min_order_amount: Option<f64>,
    pub created_date: NaiveDate,
}

impl Promotion {
    pub fn promotion_type(&self) -> PromotionType {
        self.kind.promotion_type()
    }

    /// Active becomes inactive, anything else becomes active.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            PromotionStatus::Active => PromotionStatus::Inactive,
            _ => PromotionStatus::Active,
        };
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.status {
            PromotionStatus::Active => "Désactiver",
            _ => "Activer",
        }
    }

    /// "156 / 1000" when limited, "156" otherwise.
    pub fn usage_label(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {}", self.usage_count, limit),
            None => self.usage_count.to_string(),
        }
    }
}

impl Entity for Promotion {
    const ID_PREFIX: &'static str = "PROMO-";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.kind.code());
        fields
    }

    fn seed() -> Vec<Self> {
        super::seed::promotions()
    }

    fn element_name() -> &'static str {
        "promotion"
    }

    fn on_create(&mut self, today: NaiveDate) {
        self.usage_count = 0;
        self.created_date = today;
    }
}

/// Free-text search combined with the type and status selects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionFilter {
    pub query: String,
    pub promotion_type: Choice<PromotionType>,
    pub status: Choice<PromotionStatus>,
}

impl RecordFilter<Promotion> for PromotionFilter {
    fn matches(&self, promotion: &Promotion) -> bool {
        matches_query(&promotion.search_fields(), &self.query)
            && self.promotion_type.admits(&promotion.promotion_type())
            && self.status.admits(&promotion.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;

    fn seeded() -> Vec<Promotion> {
        super::super::seed::promotions()
    }

    #[test]
    fn test_toggle_active_inactive_twice_is_identity() {
        let mut promo = seeded().remove(1);
        assert_eq!(promo.status, PromotionStatus::Active);
        let before = promo.clone();
        promo.toggle_status();
        assert_eq!(promo.status, PromotionStatus::Inactive);
        promo.toggle_status();
        assert_eq!(promo, before);
    }

    #[test]
    fn test_toggle_scheduled_and_expired_activate() {
        let promos = seeded();
        for idx in [2, 4] {
            let mut promo = promos[idx].clone();
            promo.toggle_status();
            assert_eq!(promo.status, PromotionStatus::Active);
        }
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(Discount::Percentage(25.0).label(), "25%");
        assert_eq!(Discount::Fixed(50.0).label(), "$50");
        assert_eq!(Discount::Percentage(12.5).label(), "12.5%");
    }

    #[test]
    fn test_code_is_searchable_only_on_code_promotions() {
        let store: EntityStore<Promotion> = EntityStore::seeded();
        let hits = store.filtered(&PromotionFilter {
            query: "spring2024".into(),
            ..Default::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind.code(), Some("SPRING2024"));
        assert!(hits[0].kind.image().is_none());
    }

    #[test]
    fn test_filter_type_and_status() {
        let store: EntityStore<Promotion> = EntityStore::seeded();

        let banners = store.filtered(&PromotionFilter {
            promotion_type: Choice::Only(PromotionType::Banner),
            ..Default::default()
        });
        assert_eq!(banners.len(), 2);

        let active_codes = store.filtered(&PromotionFilter {
            promotion_type: Choice::Only(PromotionType::Code),
            status: Choice::Only(PromotionStatus::Active),
            ..Default::default()
        });
        assert_eq!(active_codes.len(), 1);
        assert_eq!(active_codes[0].title, "WELCOME10");
    }

    #[test]
    fn test_usage_label() {
        let promos = seeded();
        assert_eq!(promos[0].usage_label(), "156");
        assert_eq!(promos[1].usage_label(), "89 / 1000");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(&seeded()[1]).unwrap();
        assert_eq!(json["type"], "discount_code");
        assert_eq!(json["code"], "WELCOME10");
        assert_eq!(json["discountType"], "percentage");
        assert_eq!(json["discountValue"], 10.0);
        assert_eq!(json["usageLimit"], 1000);
        assert_eq!(json["startDate"], "2024-01-01");
    }
}
