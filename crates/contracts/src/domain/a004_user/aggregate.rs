use crate::domain::a003_order::OrderStatus;
use crate::domain::common::{matches_query, Choice, Entity, RecordFilter, RecordId, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Banned,
}

impl UserStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Banned => "banned",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Actif",
            UserStatus::Banned => "Bloqué",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            UserStatus::Active => StatusTone::Success,
            UserStatus::Banned => StatusTone::Error,
        }
    }

    pub fn all() -> Vec<UserStatus> {
        vec![UserStatus::Active, UserStatus::Banned]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(UserStatus::Active),
            "banned" => Some(UserStatus::Banned),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Banned,
            UserStatus::Banned => UserStatus::Active,
        }
    }
}

/// Entry of a customer's order history.
///
/// Kept on the user record itself; it does not follow the Orders page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrder {
    pub id: RecordId,
    pub order_date: NaiveDate,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub item_count: u32,
}

/// Customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registration_date: NaiveDate,
    pub last_login_date: NaiveDate,
    pub status: UserStatus,
    pub total_orders: u32,
    pub total_spent: f64,
    pub orders: Vec<UserOrder>,
    pub avatar: Option<String>,
}

impl User {
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    pub fn is_banned(&self) -> bool {
        self.status == UserStatus::Banned
    }

    /// Upper-cased first letter of every word of the name ("Mike Johnson" -> "MJ").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Label of the ban/unban action for the current status.
    pub fn toggle_label(&self) -> &'static str {
        match self.status {
            UserStatus::Active => "Bloquer l'utilisateur",
            UserStatus::Banned => "Débloquer l'utilisateur",
        }
    }
}

impl Entity for User {
    const ID_PREFIX: &'static str = "USR-";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.id.as_str()]
    }

    fn seed() -> Vec<Self> {
        super::seed::users()
    }

    fn element_name() -> &'static str {
        "user"
    }
}

/// Free-text search combined with the status select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub query: String,
    pub status: Choice<UserStatus>,
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        matches_query(&user.search_fields(), &self.query)
            && self.status.admits(&user.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityStore;

    #[test]
    fn test_toggle_twice_is_identity() {
        for mut user in super::super::seed::users() {
            let before = user.clone();
            user.toggle_status();
            assert_ne!(user.status, before.status);
            user.toggle_status();
            assert_eq!(user, before);
        }
    }

    #[test]
    fn test_initials() {
        let mut users = super::super::seed::users();
        assert_eq!(users[0].initials(), "S");
        assert_eq!(users[2].initials(), "MJ");
        users[0].name = "  jean   luc picard ".into();
        assert_eq!(users[0].initials(), "JLP");
    }

    #[test]
    fn test_filter_by_status_and_query() {
        let store: EntityStore<User> = EntityStore::seeded();

        let banned = store.filtered(&UserFilter {
            query: String::new(),
            status: Choice::Only(UserStatus::Banned),
        });
        assert_eq!(banned.len(), 1);
        assert_eq!(banned[0].name, "Sarah Wilson");

        let by_email = store.filtered(&UserFilter {
            query: "EXAMPLE.COM".into(),
            status: Choice::Only(UserStatus::Active),
        });
        let names: Vec<&str> = by_email.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Mike Johnson", "Tom Brown"]);

        let by_id = store.filtered(&UserFilter {
            query: "usr-002".into(),
            status: Choice::All,
        });
        assert_eq!(by_id.len(), 1);
    }

    #[test]
    fn test_history_is_independent_from_orders() {
        let users = super::super::seed::users();
        assert_eq!(users[0].orders[0].id.as_str(), "ORD-001");
        assert_eq!(users[0].orders[0].total_amount, 239.97);
        assert!(users[4].orders.len() == 1);
    }
}
