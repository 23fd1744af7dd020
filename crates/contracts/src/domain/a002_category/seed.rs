use super::Category;
use crate::domain::common::{date, RecordId};
use chrono::NaiveDate;

fn category(
    id: &str,
    name: &str,
    description: &str,
    product_count: u32,
    is_active: bool,
    created_at: NaiveDate,
) -> Category {
    Category {
        id: RecordId::new(id),
        name: name.into(),
        description: description.into(),
        product_count,
        is_active,
        created_at,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(
            "1",
            "Electronics",
            "Electronic devices and gadgets including phones, laptops, and accessories",
            45,
            true,
            date(2024, 1, 15),
        ),
        category(
            "2",
            "Accessories",
            "Various accessories for electronic devices and daily use items",
            32,
            true,
            date(2024, 1, 20),
        ),
        category(
            "3",
            "Clothing",
            "Fashion and apparel for men, women, and children",
            28,
            true,
            date(2024, 2, 1),
        ),
        category(
            "4",
            "Home & Garden",
            "Home improvement, furniture, and gardening supplies",
            15,
            true,
            date(2024, 2, 10),
        ),
        category(
            "5",
            "Sports & Outdoors",
            "Sports equipment, outdoor gear, and fitness accessories",
            22,
            true,
            date(2024, 2, 15),
        ),
        category(
            "6",
            "Books",
            "Physical and digital books across various genres",
            8,
            false,
            date(2024, 3, 1),
        ),
    ]
}
