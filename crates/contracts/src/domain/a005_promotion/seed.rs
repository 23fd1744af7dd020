use super::{Discount, Promotion, PromotionKind, PromotionStatus};
use crate::domain::common::{date, RecordId};

pub fn promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: RecordId::new("PROMO-001"),
            title: "Summer Sale 2024".into(),
            description: "Get 25% off on all electronics during our summer sale".into(),
            kind: PromotionKind::Banner {
                image: "/summer-sale-banner.png".into(),
            },
            discount: Discount::Percentage(25.0),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 8, 31),
            status: PromotionStatus::Active,
            usage_count: 156,
            usage_limit: None,
            min_order_amount: Some(50.0),
            created_date: date(2024, 5, 15),
        },
        Promotion {
            id: RecordId::new("PROMO-002"),
            title: "WELCOME10".into(),
            description: "Welcome discount for new customers".into(),
            kind: PromotionKind::Code {
                code: "WELCOME10".into(),
            },
            discount: Discount::Percentage(10.0),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            status: PromotionStatus::Active,
            usage_count: 89,
            usage_limit: Some(1000),
            min_order_amount: Some(25.0),
            created_date: date(2024, 1, 1),
        },
        Promotion {
            id: RecordId::new("PROMO-003"),
            title: "Flash Sale - Headphones".into(),
            description: "$50 off premium headphones for 24 hours only".into(),
            kind: PromotionKind::Sale,
            discount: Discount::Fixed(50.0),
            start_date: date(2024, 3, 25),
            end_date: date(2024, 3, 26),
            status: PromotionStatus::Expired,
            usage_count: 23,
            usage_limit: Some(100),
            min_order_amount: None,
            created_date: date(2024, 3, 24),
        },
        Promotion {
            id: RecordId::new("PROMO-004"),
            title: "SPRING2024".into(),
            description: "Spring collection discount code".into(),
            kind: PromotionKind::Code {
                code: "SPRING2024".into(),
            },
            discount: Discount::Percentage(15.0),
            start_date: date(2024, 4, 1),
            end_date: date(2024, 5, 31),
            status: PromotionStatus::Inactive,
            usage_count: 0,
            usage_limit: Some(500),
            min_order_amount: Some(75.0),
            created_date: date(2024, 3, 28),
        },
        Promotion {
            id: RecordId::new("PROMO-005"),
            title: "Black Friday Mega Sale".into(),
            description: "Biggest sale of the year - up to 60% off everything".into(),
            kind: PromotionKind::Banner {
                image: "/black-friday-banner.png".into(),
            },
            discount: Discount::Percentage(60.0),
            start_date: date(2024, 11, 29),
            end_date: date(2024, 12, 2),
            status: PromotionStatus::Scheduled,
            usage_count: 0,
            usage_limit: None,
            min_order_amount: None,
            created_date: date(2024, 3, 20),
        },
    ]
}
