use super::{User, UserOrder, UserStatus};
use crate::domain::a003_order::OrderStatus;
use crate::domain::common::{date, RecordId};
use chrono::NaiveDate;

const AVATAR: &str = "/customer-avatar.png";

fn history(id: &str, order_date: NaiveDate, total_amount: f64, status: OrderStatus, item_count: u32) -> UserOrder {
    UserOrder {
        id: RecordId::new(id),
        order_date,
        total_amount,
        status,
        item_count,
    }
}

pub fn users() -> Vec<User> {
    use OrderStatus::*;

    vec![
        User {
            id: RecordId::new("USR-001"),
            name: "Seth".into(),
            email: "tafikaseth@gmail.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Main St, New York, NY 10001".into(),
            registration_date: date(2024, 1, 15),
            last_login_date: date(2024, 3, 22),
            status: UserStatus::Active,
            total_orders: 5,
            total_spent: 1299.95,
            orders: vec![
                history("ORD-001", date(2024, 3, 15), 239.97, Delivered, 2),
                history("ORD-015", date(2024, 2, 28), 199.99, Delivered, 1),
                history("ORD-025", date(2024, 2, 10), 89.99, Delivered, 1),
            ],
            avatar: Some(AVATAR.into()),
        },
        User {
            id: RecordId::new("USR-002"),
            name: "Cynthia Ceth".into(),
            email: "ceth@gmail.com".into(),
            phone: "+1 (555) 987-6543".into(),
            address: "456 Oak Ave, Los Angeles, CA 90210".into(),
            registration_date: date(2024, 2, 1),
            last_login_date: date(2024, 3, 21),
            status: UserStatus::Active,
            total_orders: 3,
            total_spent: 849.97,
            orders: vec![
                history("ORD-002", date(2024, 3, 20), 299.99, Shipped, 1),
                history("ORD-018", date(2024, 3, 5), 149.99, Shipped, 2),
            ],
            avatar: Some(AVATAR.into()),
        },
        User {
            id: RecordId::new("USR-003"),
            name: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            phone: "+1 (555) 456-7890".into(),
            address: "789 Pine St, Chicago, IL 60601".into(),
            registration_date: date(2024, 2, 15),
            last_login_date: date(2024, 3, 22),
            status: UserStatus::Active,
            total_orders: 2,
            total_spent: 289.95,
            orders: vec![
                history("ORD-003", date(2024, 3, 22), 139.96, Pending, 4),
                history("ORD-020", date(2024, 3, 1), 149.99, Delivered, 1),
            ],
            avatar: Some(AVATAR.into()),
        },
        User {
            id: RecordId::new("USR-004"),
            name: "Sarah Wilson".into(),
            email: "sarah@example.com".into(),
            phone: "+1 (555) 321-0987".into(),
            address: "321 Elm St, Miami, FL 33101".into(),
            registration_date: date(2024, 1, 20),
            last_login_date: date(2024, 3, 18),
            status: UserStatus::Banned,
            total_orders: 4,
            total_spent: 699.96,
            orders: vec![
                history("ORD-004", date(2024, 3, 18), 399.98, Cancelled, 2),
                history("ORD-012", date(2024, 2, 20), 99.99, Delivered, 1),
            ],
            avatar: Some(AVATAR.into()),
        },
        User {
            id: RecordId::new("USR-005"),
            name: "Tom Brown".into(),
            email: "tom@example.com".into(),
            phone: "+1 (555) 654-3210".into(),
            address: "654 Maple Dr, Seattle, WA 98101".into(),
            registration_date: date(2024, 3, 1),
            last_login_date: date(2024, 3, 20),
            status: UserStatus::Active,
            total_orders: 1,
            total_spent: 49.99,
            orders: vec![history("ORD-030", date(2024, 3, 10), 49.99, Delivered, 1)],
            avatar: Some(AVATAR.into()),
        },
    ]
}
