use super::{Order, OrderItem, OrderStatus};
use crate::domain::common::{date, RecordId};

const CUSTOMER_NAME: &str = "Seth Tafika";
const CUSTOMER_EMAIL: &str = "tafikaseth@gmail.com";

fn item(id: &str, product_name: &str, quantity: u32, price: f64, image: &str) -> OrderItem {
    OrderItem {
        id: RecordId::new(id),
        product_name: product_name.into(),
        quantity,
        price,
        image: image.into(),
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: RecordId::new("ORD-001"),
            customer_name: CUSTOMER_NAME.into(),
            customer_email: CUSTOMER_EMAIL.into(),
            customer_phone: "+1 (555) 123-4567".into(),
            shipping_address: "123 Main St, New York, NY 10001".into(),
            items: vec![
                item("1", "Canapé en tissu", 1, 799.99, "/canape-tissu.png"),
                item("2", "Lampe de chevet", 2, 39.99, "/lampe-chevet.png"),
            ],
            total_amount: 879.97,
            status: OrderStatus::Delivered,
            order_date: date(2024, 3, 15),
            shipped_date: Some(date(2024, 3, 16)),
            delivered_date: Some(date(2024, 3, 18)),
        },
        Order {
            id: RecordId::new("ORD-002"),
            customer_name: CUSTOMER_NAME.into(),
            customer_email: CUSTOMER_EMAIL.into(),
            customer_phone: "+1 (555) 987-6543".into(),
            shipping_address: "456 Oak Ave, Los Angeles, CA 90210".into(),
            items: vec![item("3", "Table à manger", 1, 499.99, "/table-bois.png")],
            total_amount: 499.99,
            status: OrderStatus::Shipped,
            order_date: date(2024, 3, 20),
            shipped_date: Some(date(2024, 3, 21)),
            delivered_date: None,
        },
        Order {
            id: RecordId::new("ORD-003"),
            customer_name: CUSTOMER_NAME.into(),
            customer_email: CUSTOMER_EMAIL.into(),
            customer_phone: "+1 (555) 456-7890".into(),
            shipping_address: "789 Pine St, Chicago, IL 60601".into(),
            items: vec![
                item("4", "Chaise de salon", 1, 89.99, "/chaise-salon.png"),
                item("5", "Buffet en chêne", 1, 649.99, "/buffet-chene.png"),
            ],
            total_amount: 739.98,
            status: OrderStatus::Pending,
            order_date: date(2024, 3, 22),
            shipped_date: None,
            delivered_date: None,
        },
        Order {
            id: RecordId::new("ORD-004"),
            customer_name: CUSTOMER_NAME.into(),
            customer_email: CUSTOMER_EMAIL.into(),
            customer_phone: "+1 (555) 321-0987".into(),
            shipping_address: "321 Elm St, Miami, FL 33101".into(),
            items: vec![item("1", "Tapis moderne", 2, 199.99, "/tapis-moderne.png")],
            total_amount: 399.98,
            status: OrderStatus::Cancelled,
            order_date: date(2024, 3, 18),
            shipped_date: None,
            delivered_date: None,
        },
    ]
}
