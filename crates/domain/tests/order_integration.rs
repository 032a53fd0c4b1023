//! Integration tests for the order and order-detail services.
//!
//! These tests drive the services end to end over an in-memory unit of
//! work, through the public API only.

use std::sync::Arc;

use chrono::Utc;
use common::{EntityId, Money, Status};
use domain::{OrderDetailDto, OrderDetailService, OrderDto, OrderService, UnitOfWork};

fn services() -> (OrderService, OrderDetailService) {
    let uow = Arc::new(UnitOfWork::in_memory());
    (OrderService::new(Arc::clone(&uow)), OrderDetailService::new(uow))
}

fn order_dto(user_id: &str, order_number: &str) -> OrderDto {
    OrderDto {
        id: EntityId::nil(),
        order_number: Some(order_number.to_string()),
        order_type: Some("retail".to_string()),
        total_amount: Money::from_cents(5000),
        discount: Money::from_cents(500),
        total_after_discount: Money::from_cents(4500),
        branch_id: EntityId::new(),
        company_id: Some(EntityId::new()),
        user_id: user_id.to_string(),
        created_at: Some(Utc::now()),
    }
}

fn detail_dto(order_id: EntityId, description: &str) -> OrderDetailDto {
    OrderDetailDto {
        id: EntityId::nil(),
        order_id,
        product_unit_id: EntityId::new(),
        quantity: 3,
        line_total: Money::from_cents(1500),
        description: description.to_string(),
    }
}

mod order_lifecycle {
    use super::*;

    #[tokio::test]
    async fn create_get_update_delete() {
        let (orders, _) = services();

        // Create
        let created = orders
            .create(order_dto("user-1", "N-1"))
            .await
            .into_data()
            .unwrap();
        assert!(!created.id.is_nil());

        // Get
        let fetched = orders.get_by_id(created.id).await.into_data().unwrap();
        assert_eq!(fetched, created);

        // Update
        let mut changed = fetched;
        changed.discount = Money::from_cents(1000);
        changed.total_after_discount = Money::from_cents(4000);
        let updated = orders.update(changed.clone()).await.into_data().unwrap();
        assert_eq!(updated, changed);

        // Delete
        let removed = orders.delete(created.id).await.into_data().unwrap();
        assert_eq!(removed, changed);

        let gone = orders.get_by_id(created.id).await;
        assert_eq!(gone.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn get_all_returns_every_order() {
        let (orders, _) = services();
        orders.create(order_dto("user-1", "N-1")).await;
        orders.create(order_dto("user-2", "N-2")).await;

        let all = orders.get_all().await.into_data().unwrap();
        assert_eq!(all.len(), 2);
    }
}

mod order_lines {
    use super::*;

    #[tokio::test]
    async fn lines_attach_to_their_order() {
        let (orders, details) = services();
        let order = orders
            .create(order_dto("user-1", "N-1"))
            .await
            .into_data()
            .unwrap();
        let other = orders
            .create(order_dto("user-1", "N-2"))
            .await
            .into_data()
            .unwrap();

        details.create(detail_dto(order.id, "first line")).await;
        details.create(detail_dto(order.id, "second line")).await;
        details.create(detail_dto(other.id, "someone else's line")).await;

        let lines = details.get_by_order(order.id).await.into_data().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.order_id == order.id));
    }

    #[tokio::test]
    async fn line_update_and_delete_round_trip() {
        let (orders, details) = services();
        let order = orders
            .create(order_dto("user-1", "N-1"))
            .await
            .into_data()
            .unwrap();

        let mut line = details
            .create(detail_dto(order.id, "draft"))
            .await
            .into_data()
            .unwrap();

        line.quantity = 9;
        let updated = details.update(line.clone()).await.into_data().unwrap();
        assert_eq!(updated.quantity, 9);

        let removed = details.delete(line.id).await.into_data().unwrap();
        assert_eq!(removed, line);
        assert_eq!(details.get_by_id(line.id).await.status(), Status::NotFound);
    }
}

mod user_queries {
    use super::*;

    #[tokio::test]
    async fn orders_filter_by_owning_user() {
        let (orders, _) = services();
        orders.create(order_dto("alice", "N-1")).await;
        orders.create(order_dto("bob", "N-2")).await;
        orders.create(order_dto("alice", "N-3")).await;

        let alices = orders.get_by_user("alice").await.into_data().unwrap();
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|order| order.user_id == "alice"));

        let nobodys = orders.get_by_user("nobody").await.into_data().unwrap();
        assert!(nobodys.is_empty());
    }
}
