//! Entity-specific queries layered over the generic capability bundle.

use async_trait::async_trait;
use common::EntityId;
use entity_store::{Entity, GetAll, InMemoryRepository, PgRepository, Repository, Result};

use crate::entities::{Order, OrderDetail};

/// Queries an order repository answers beyond the five primitives.
#[async_trait]
pub trait OrderQueries: Send + Sync {
    /// Fetches every order belonging to `user_id`, ordered by id.
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>>;
}

/// Queries an order-detail repository answers beyond the five primitives.
#[async_trait]
pub trait OrderDetailQueries: Send + Sync {
    /// Fetches every line belonging to the order, ordered by id.
    async fn get_by_order(&self, order_id: EntityId) -> Result<Vec<OrderDetail>>;
}

/// The full capability surface for orders.
pub trait OrderRepository: Repository<Order> + OrderQueries {}

impl<R> OrderRepository for R where R: Repository<Order> + OrderQueries + ?Sized {}

/// The full capability surface for order details.
pub trait OrderDetailRepository: Repository<OrderDetail> + OrderDetailQueries {}

impl<R> OrderDetailRepository for R where R: Repository<OrderDetail> + OrderDetailQueries + ?Sized {}

fn orders_by_user_sql() -> String {
    format!(
        "SELECT id, {} FROM {} WHERE user_id = $1 ORDER BY id ASC",
        Order::COLUMNS.join(", "),
        Order::TABLE
    )
}

fn details_by_order_sql() -> String {
    format!(
        "SELECT id, {} FROM {} WHERE order_id = $1 ORDER BY id ASC",
        OrderDetail::COLUMNS.join(", "),
        OrderDetail::TABLE
    )
}

#[async_trait]
impl OrderQueries for PgRepository<Order> {
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let sql = orders_by_user_sql();
        let rows = sqlx::query(&sql)
            .bind(user_id.to_string())
            .fetch_all(self.pool())
            .await?;

        rows.iter().map(|row| Ok(Order::from_row(row)?)).collect()
    }
}

#[async_trait]
impl OrderDetailQueries for PgRepository<OrderDetail> {
    async fn get_by_order(&self, order_id: EntityId) -> Result<Vec<OrderDetail>> {
        let sql = details_by_order_sql();
        let rows = sqlx::query(&sql)
            .bind(order_id.as_uuid())
            .fetch_all(self.pool())
            .await?;

        rows.iter()
            .map(|row| Ok(OrderDetail::from_row(row)?))
            .collect()
    }
}

#[async_trait]
impl OrderQueries for InMemoryRepository<Order> {
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let mut orders = self.get_all().await?;
        orders.retain(|order| order.user_id == user_id);
        Ok(orders)
    }
}

#[async_trait]
impl OrderDetailQueries for InMemoryRepository<OrderDetail> {
    async fn get_by_order(&self, order_id: EntityId) -> Result<Vec<OrderDetail>> {
        let mut lines = self.get_all().await?;
        lines.retain(|line| line.order_id == order_id);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::Money;
    use entity_store::Create;

    fn order(user_id: &str) -> Order {
        Order {
            id: EntityId::nil(),
            order_number: None,
            order_type: None,
            total_amount: Money::from_cents(1000),
            discount: Money::zero(),
            total_after_discount: Money::from_cents(1000),
            branch_id: EntityId::new(),
            company_id: None,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        }
    }

    fn line(order_id: EntityId) -> OrderDetail {
        OrderDetail {
            id: EntityId::nil(),
            order_id,
            product_unit_id: EntityId::new(),
            quantity: 1,
            line_total: Money::from_cents(500),
            description: String::new(),
        }
    }

    #[test]
    fn orders_by_user_sql_filters_on_user_id() {
        assert_eq!(
            orders_by_user_sql(),
            "SELECT id, order_number, order_type, total_amount, discount, \
             total_after_discount, branch_id, company_id, user_id, created_at \
             FROM orders WHERE user_id = $1 ORDER BY id ASC"
        );
    }

    #[test]
    fn details_by_order_sql_filters_on_order_id() {
        assert_eq!(
            details_by_order_sql(),
            "SELECT id, order_id, product_unit_id, quantity, line_total, description \
             FROM order_details WHERE order_id = $1 ORDER BY id ASC"
        );
    }

    #[tokio::test]
    async fn get_by_user_returns_only_that_users_orders() {
        let repo = InMemoryRepository::<Order>::new();
        repo.create(order("alice")).await.unwrap();
        repo.create(order("bob")).await.unwrap();
        repo.create(order("alice")).await.unwrap();

        let orders = repo.get_by_user("alice").await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|order| order.user_id == "alice"));
    }

    #[tokio::test]
    async fn get_by_order_returns_only_that_orders_lines() {
        let repo = InMemoryRepository::<OrderDetail>::new();
        let order_id = EntityId::new();
        let other_order = EntityId::new();

        repo.create(line(order_id)).await.unwrap();
        repo.create(line(other_order)).await.unwrap();
        repo.create(line(order_id)).await.unwrap();

        let lines = repo.get_by_order(order_id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.order_id == order_id));
    }
}
