use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::audit::Audit;
use super::ids::Id;
use super::member::Member;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Order,
    Cancel,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Order => "Ordered",
            OrderStatus::Cancel => "Cancelled",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ORDER" => Some(OrderStatus::Order),
            "CANCEL" => Some(OrderStatus::Cancel),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            OrderStatus::Order => "ORDER",
            OrderStatus::Cancel => "CANCEL",
        }
    }
}

/// An order placed by a member. The order owns the member reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<Id<Order>>,
    pub member_id: Id<Member>,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
    #[serde(default)]
    pub audit: Audit,
}

impl Order {
    pub fn create(member_id: Id<Member>) -> Self {
        Self {
            id: None,
            member_id,
            order_date: Utc::now().naive_utc(),
            status: OrderStatus::Order,
            audit: Audit::default(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_db_strings_roundtrip() {
        for status in [OrderStatus::Order, OrderStatus::Cancel] {
            assert_eq!(OrderStatus::from_db_str(status.to_db_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_db_str("SHIPPED"), None);
    }

    #[test]
    fn create_starts_unsaved_and_ordered() {
        let order = Order::create(Id::new(1));
        assert_eq!(order.id, None);
        assert_eq!(order.status, OrderStatus::Order);
        assert!(!order.is_cancelled());
    }
}
