//! # Admin Reports
//!
//! Pure aggregations over store snapshots for the admin dashboard. Nothing
//! here mutates; every figure is recomputed from the collections on demand,
//! so the dashboard can never drift out of sync with the data.

use serde::{Deserialize, Serialize};

use bookstand_core::money::Money;
use bookstand_core::{Book, Order, User};

/// Headline figures for the admin dashboard.
///
/// ## Rules
/// - `total_customers` counts non-admin accounts only
/// - `total_revenue_cents` sums order totals across ALL statuses; a
///   pending order already counts as revenue (no cancellation state
///   exists to back anything out)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: usize,
    pub total_orders: usize,
    pub total_customers: usize,
    pub total_revenue_cents: i64,
}

impl DashboardStats {
    /// Revenue as typed money, for display.
    pub fn total_revenue(&self) -> Money {
        Money::from_cents(self.total_revenue_cents)
    }
}

/// Computes the dashboard aggregates from the current collections.
pub fn dashboard_stats(books: &[Book], users: &[User], orders: &[Order]) -> DashboardStats {
    DashboardStats {
        total_books: books.len(),
        total_orders: orders.len(),
        total_customers: users.iter().filter(|u| !u.is_admin).count(),
        total_revenue_cents: orders.iter().map(|o| o.total_cents).sum(),
    }
}

/// Number of orders a single user has placed, for the customer table.
pub fn order_count_for_user(orders: &[Order], user_id: &str) -> usize {
    orders.iter().filter(|o| o.user_id == user_id).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstand_core::{OrderStatus, PaymentMethod};
    use chrono::Utc;

    fn user(id: &str, is_admin: bool) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            password: "secret1".to_string(),
            phone: None,
            address: None,
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn order(user_id: &str, total_cents: i64, status: OrderStatus) -> Order {
        Order {
            id: format!("order-{}-{}", user_id, total_cents),
            user_id: user_id.to_string(),
            items: Vec::new(),
            address: "42 Elm Street".to_string(),
            payment_method: PaymentMethod::Cod,
            status,
            subtotal_cents: total_cents,
            shipping_cents: 0,
            total_cents,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_customers_exclude_admins() {
        let users = vec![user("a", true), user("b", false), user("c", false)];
        let stats = dashboard_stats(&[], &users, &[]);
        assert_eq!(stats.total_customers, 2);
    }

    #[test]
    fn test_revenue_counts_all_statuses() {
        let orders = vec![
            order("u1", 1000, OrderStatus::Pending),
            order("u1", 2500, OrderStatus::Shipped),
            order("u2", 500, OrderStatus::Delivered),
        ];
        let stats = dashboard_stats(&[], &[], &orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue_cents, 4000);
        assert_eq!(stats.total_revenue().to_string(), "$40.00");
    }

    #[test]
    fn test_order_count_per_user() {
        let orders = vec![
            order("u1", 1000, OrderStatus::Pending),
            order("u1", 2500, OrderStatus::Confirmed),
            order("u2", 500, OrderStatus::Pending),
        ];
        assert_eq!(order_count_for_user(&orders, "u1"), 2);
        assert_eq!(order_count_for_user(&orders, "u2"), 1);
        assert_eq!(order_count_for_user(&orders, "u3"), 0);
    }

    #[test]
    fn test_empty_store_stats() {
        let stats = dashboard_stats(&[], &[], &[]);
        assert_eq!(stats.total_books, 0);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_customers, 0);
        assert_eq!(stats.total_revenue_cents, 0);
    }
}
