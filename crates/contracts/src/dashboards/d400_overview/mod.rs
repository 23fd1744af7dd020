//! Overview dashboard data.
//!
//! The widgets read these fixed figures only; they never look at the entity
//! stores of the list pages.

use crate::domain::a003_order::OrderStatus;
use crate::shared::indicators::{Indicator, ValueFormat};
use serde::{Deserialize, Serialize};

/// Point of the monthly sales series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub total: f64,
}

/// Row of the best-sellers widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
    pub revenue: String,
}

/// Row of the recent-orders widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub status: OrderStatus,
    pub ago: String,
}

fn indicator(id: &str, label: &str, icon: &str, format: ValueFormat, value: f64, change: f64) -> Indicator {
    Indicator {
        id: id.into(),
        label: label.into(),
        icon: icon.into(),
        format,
        value,
        change_percent: change,
    }
}

pub fn indicators() -> Vec<Indicator> {
    vec![
        indicator(
            "revenue",
            "Chiffre d'affaires total",
            "dollar",
            ValueFormat::Money {
                currency: "$".into(),
            },
            45231.89,
            20.1,
        ),
        indicator("orders", "Commandes", "shopping-cart", ValueFormat::Integer, 2350.0, 15.3),
        indicator("customers", "Clients", "users", ValueFormat::Integer, 1234.0, 8.2),
        indicator("products", "Produits", "package", ValueFormat::Integer, 567.0, -2.1),
    ]
}

pub fn monthly_sales() -> Vec<MonthlySales> {
    [
        ("Jan", 4000.0),
        ("Feb", 3000.0),
        ("Mar", 5000.0),
        ("Apr", 4500.0),
        ("May", 6000.0),
        ("Jun", 5500.0),
        ("Jul", 7000.0),
        ("Aug", 6500.0),
        ("Sep", 8000.0),
        ("Oct", 7500.0),
        ("Nov", 9000.0),
        ("Dec", 8500.0),
    ]
    .into_iter()
    .map(|(month, total)| MonthlySales {
        month: month.into(),
        total,
    })
    .collect()
}

/// Reference figure the best-seller progress bars are measured against.
pub const TOP_PRODUCTS_MAX_SALES: u32 = 1500;

pub fn top_products() -> Vec<TopProduct> {
    [
        ("Chaise en bois", 1234, "24 680 $"),
        ("Canapé 3 places", 987, "19 740 $"),
        ("Table à manger", 756, "15 120 $"),
        ("Lampe de chevet", 543, "10 860 $"),
        ("Buffet en chêne", 432, "8 640 $"),
    ]
    .into_iter()
    .map(|(name, sales, revenue)| TopProduct {
        name: name.into(),
        sales,
        revenue: revenue.into(),
    })
    .collect()
}

/// Share of `sales` in `max`, as a percentage clamped to 0..=100.
pub fn sales_progress(sales: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(sales) / f64::from(max) * 100.0).clamp(0.0, 100.0)
}

pub fn recent_orders() -> Vec<RecentOrder> {
    [
        ("#12345", "John Doe", 299.99, OrderStatus::Delivered, "2 hours ago"),
        ("#12346", "Jane Smith", 149.50, OrderStatus::Shipped, "4 hours ago"),
        ("#12347", "Bob Johnson", 89.99, OrderStatus::Pending, "6 hours ago"),
        ("#12348", "Alice Brown", 199.99, OrderStatus::Delivered, "8 hours ago"),
        ("#12349", "Charlie Wilson", 79.99, OrderStatus::Cancelled, "1 day ago"),
    ]
    .into_iter()
    .map(|(id, customer, amount, status, ago)| RecentOrder {
        id: id.into(),
        customer: customer.into(),
        amount,
        status,
        ago: ago.into(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::IndicatorStatus;

    #[test]
    fn test_indicator_trends() {
        let statuses: Vec<IndicatorStatus> = indicators().iter().map(|i| i.status()).collect();
        assert_eq!(
            statuses,
            vec![
                IndicatorStatus::Good,
                IndicatorStatus::Good,
                IndicatorStatus::Good,
                IndicatorStatus::Bad
            ]
        );
    }

    #[test]
    fn test_monthly_series_is_complete() {
        let series = monthly_sales();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, "Jan");
        assert_eq!(series[11].total, 8500.0);
    }

    #[test]
    fn test_sales_progress() {
        assert_eq!(sales_progress(750, 1500), 50.0);
        assert_eq!(sales_progress(3000, 1500), 100.0);
        assert_eq!(sales_progress(10, 0), 0.0);
        let first = &top_products()[0];
        assert!((sales_progress(first.sales, TOP_PRODUCTS_MAX_SALES) - 82.266).abs() < 0.01);
    }

    #[test]
    fn test_recent_orders() {
        let orders = recent_orders();
        assert_eq!(orders.len(), 5);
        assert_eq!(orders[4].status, OrderStatus::Cancelled);
    }
}
