use crate::domain::common::{matches_query, Choice, Entity, RecordFilter, RecordId, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "En cours",
            OrderStatus::Shipped => "Expédié",
            OrderStatus::Delivered => "Livré",
            OrderStatus::Cancelled => "Annulé",
        }
    }

    /// Label of the row action that moves an order into this status.
    pub fn action_label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Remettre en attente",
            OrderStatus::Shipped => "Marquer comme expédié",
            OrderStatus::Delivered => "Marquer comme livré",
            OrderStatus::Cancelled => "Annulé",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Warning,
            OrderStatus::Shipped => StatusTone::Info,
            OrderStatus::Delivered => StatusTone::Success,
            OrderStatus::Cancelled => StatusTone::Error,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Statuses reachable from this one. Delivered and cancelled are terminal.
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered, OrderStatus::Cancelled],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_become(&self, target: OrderStatus) -> bool {
        self.next_statuses().contains(&target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order cannot move from {} to {}", .from.code(), .to.code())]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: RecordId,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub image: String,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub shipped_date: Option<NaiveDate>,
    pub delivered_date: Option<NaiveDate>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn available_actions(&self) -> &'static [OrderStatus] {
        self.status.next_statuses()
    }

    /// Move the order to `target`, stamping dates that are still missing.
    ///
    /// Shipping sets `shipped_date`; delivering sets `delivered_date` and
    /// backfills `shipped_date`. Dates already present are never rewritten.
    /// A rejected transition leaves the order untouched.
    pub fn transition(&mut self, target: OrderStatus, today: NaiveDate) -> Result<(), OrderError> {
        if !self.status.can_become(target) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        match target {
            OrderStatus::Shipped => {
                self.shipped_date.get_or_insert(today);
            }
            OrderStatus::Delivered => {
                self.delivered_date.get_or_insert(today);
                self.shipped_date.get_or_insert(today);
            }
            OrderStatus::Pending | OrderStatus::Cancelled => {}
        }
        self.status = target;
        Ok(())
    }
}

impl Entity for Order {
    const ID_PREFIX: &'static str = "ORD-";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer_name.as_str(), self.customer_email.as_str()]
    }

    fn seed() -> Vec<Self> {
        super::seed::orders()
    }

    fn element_name() -> &'static str {
        "order"
    }
}

/// Free-text search combined with the status select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub query: String,
    pub status: Choice<OrderStatus>,
}

impl RecordFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        matches_query(&order.search_fields(), &self.query) && self.status.admits(&order.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{date, EntityStore};

    fn seeded(id: &str) -> Order {
        super::super::seed::orders()
            .into_iter()
            .find(|o| o.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_ship_pending_order_twice() {
        let mut order = seeded("ORD-003");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.shipped_date, None);

        let today = date(2024, 3, 23);
        order.transition(OrderStatus::Shipped, today).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.shipped_date, Some(today));

        let snapshot = order.clone();
        let again = order.transition(OrderStatus::Shipped, date(2024, 3, 30));
        assert_eq!(
            again,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Shipped,
                to: OrderStatus::Shipped,
            })
        );
        assert_eq!(order, snapshot);
        assert_eq!(order.shipped_date, Some(today));
    }

    #[test]
    fn test_deliver_keeps_existing_shipped_date() {
        let mut order = seeded("ORD-002");
        order.transition(OrderStatus::Delivered, date(2024, 3, 25)).unwrap();
        assert_eq!(order.shipped_date, Some(date(2024, 3, 21)));
        assert_eq!(order.delivered_date, Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_deliver_backfills_missing_shipped_date() {
        let mut order = seeded("ORD-002");
        order.shipped_date = None;
        order.transition(OrderStatus::Delivered, date(2024, 3, 25)).unwrap();
        assert_eq!(order.shipped_date, Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_terminal_statuses_reject_everything() {
        let mut delivered = seeded("ORD-001");
        let mut cancelled = seeded("ORD-004");
        for target in OrderStatus::all() {
            assert!(delivered.transition(target, date(2024, 4, 1)).is_err());
            assert!(cancelled.transition(target, date(2024, 4, 1)).is_err());
        }
        assert!(delivered.available_actions().is_empty());
        assert_eq!(delivered, seeded("ORD-001"));
    }

    #[test]
    fn test_cancel_does_not_stamp_dates() {
        let mut order = seeded("ORD-003");
        order.transition(OrderStatus::Cancelled, date(2024, 3, 23)).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.shipped_date, None);
        assert_eq!(order.delivered_date, None);
    }

    #[test]
    fn test_transition_through_store() {
        let mut store: EntityStore<Order> = EntityStore::seeded();
        let id = RecordId::new("ORD-003");
        store
            .modify(&id, |o| o.transition(OrderStatus::Shipped, date(2024, 3, 23)))
            .unwrap()
            .unwrap();
        assert_eq!(store.find(&id).map(|o| o.status), Some(OrderStatus::Shipped));
    }

    #[test]
    fn test_status_codes_parse_back() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(Choice::parse("shipped", OrderStatus::from_code), Choice::Only(OrderStatus::Shipped));
    }

    #[test]
    fn test_filter_by_id_customer_and_status() {
        let store: EntityStore<Order> = EntityStore::seeded();

        let all = store.filtered(&OrderFilter {
            query: "tafika".into(),
            status: Choice::All,
        });
        assert_eq!(all.len(), 4);

        let pending = store.filtered(&OrderFilter {
            query: String::new(),
            status: Choice::Only(OrderStatus::Pending),
        });
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id.as_str(), "ORD-003");

        let by_id = store.filtered(&OrderFilter {
            query: "ord-004".into(),
            status: Choice::Only(OrderStatus::Delivered),
        });
        assert!(by_id.is_empty());
    }

    #[test]
    fn test_line_totals() {
        let order = seeded("ORD-001");
        assert_eq!(order.items[1].line_total(), 79.98);
        assert_eq!(order.item_count(), 3);
    }
}
