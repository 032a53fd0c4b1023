//! Order and order-detail operations over the unit of work.
//!
//! These services translate wire DTOs to entities on the way down and
//! storage errors to outcome values on the way up; nothing above this
//! layer sees a `StoreError`.

use std::sync::Arc;

use common::{EntityId, Outcome, Status};
use entity_store::StoreError;

use crate::dto::{OrderDetailDto, OrderDto};
use crate::unit_of_work::UnitOfWork;

/// Converts a storage error into the failure this layer reports: a
/// missing row is `404`, everything else `500`.
fn storage_failure<T>(error: StoreError) -> Outcome<T> {
    let status = match error {
        StoreError::NotFound { .. } => Status::NotFound,
        _ => Status::Internal,
    };
    Outcome::failure_with(error.to_string(), status)
}

/// Capability-set operations for order headers.
pub struct OrderService {
    uow: Arc<UnitOfWork>,
}

impl OrderService {
    /// Creates the service over the given unit of work.
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Persists a new order and returns it with its identity populated.
    #[tracing::instrument(skip(self, dto), fields(user_id = %dto.user_id))]
    pub async fn create(&self, dto: OrderDto) -> Outcome<OrderDto> {
        match self.uow.orders().create(dto.into_entity()).await {
            Ok(order) => Outcome::success(OrderDto::from_entity(order)),
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches one order; absence is a `404` failure.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: EntityId) -> Outcome<OrderDto> {
        match self.uow.orders().get_by_id(id).await {
            Ok(Some(order)) => Outcome::success(OrderDto::from_entity(order)),
            Ok(None) => Outcome::failure_with(format!("Order not found: {}", id), Status::NotFound),
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches every order.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Outcome<Vec<OrderDto>> {
        match self.uow.orders().get_all().await {
            Ok(orders) => Outcome::success(orders.into_iter().map(OrderDto::from_entity).collect()),
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches every order belonging to `user_id`.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_user(&self, user_id: &str) -> Outcome<Vec<OrderDto>> {
        match self.uow.orders().get_by_user(user_id).await {
            Ok(orders) => Outcome::success(orders.into_iter().map(OrderDto::from_entity).collect()),
            Err(error) => storage_failure(error),
        }
    }

    /// Rewrites an existing order; a missing id is a `404` failure.
    #[tracing::instrument(skip(self, dto), fields(order_id = %dto.id))]
    pub async fn update(&self, dto: OrderDto) -> Outcome<OrderDto> {
        match self.uow.orders().update(dto.into_entity()).await {
            Ok(order) => Outcome::success(OrderDto::from_entity(order)),
            Err(error) => storage_failure(error),
        }
    }

    /// Removes an order and returns it; absence is a `404` failure.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Outcome<OrderDto> {
        match self.uow.orders().delete(id).await {
            Ok(Some(order)) => Outcome::success(OrderDto::from_entity(order)),
            Ok(None) => Outcome::failure_with(format!("Order not found: {}", id), Status::NotFound),
            Err(error) => storage_failure(error),
        }
    }
}

/// Capability-set operations for order lines.
pub struct OrderDetailService {
    uow: Arc<UnitOfWork>,
}

impl OrderDetailService {
    /// Creates the service over the given unit of work.
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Persists a new order line and returns it with its identity populated.
    #[tracing::instrument(skip(self, dto), fields(order_id = %dto.order_id))]
    pub async fn create(&self, dto: OrderDetailDto) -> Outcome<OrderDetailDto> {
        match self.uow.order_details().create(dto.into_entity()).await {
            Ok(detail) => Outcome::success(OrderDetailDto::from_entity(detail)),
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches one order line; absence is a `404` failure.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: EntityId) -> Outcome<OrderDetailDto> {
        match self.uow.order_details().get_by_id(id).await {
            Ok(Some(detail)) => Outcome::success(OrderDetailDto::from_entity(detail)),
            Ok(None) => {
                Outcome::failure_with(format!("Order detail not found: {}", id), Status::NotFound)
            }
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches every order line.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Outcome<Vec<OrderDetailDto>> {
        match self.uow.order_details().get_all().await {
            Ok(details) => {
                Outcome::success(details.into_iter().map(OrderDetailDto::from_entity).collect())
            }
            Err(error) => storage_failure(error),
        }
    }

    /// Fetches every line belonging to the order.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_order(&self, order_id: EntityId) -> Outcome<Vec<OrderDetailDto>> {
        match self.uow.order_details().get_by_order(order_id).await {
            Ok(details) => {
                Outcome::success(details.into_iter().map(OrderDetailDto::from_entity).collect())
            }
            Err(error) => storage_failure(error),
        }
    }

    /// Rewrites an existing order line; a missing id is a `404` failure.
    #[tracing::instrument(skip(self, dto), fields(detail_id = %dto.id))]
    pub async fn update(&self, dto: OrderDetailDto) -> Outcome<OrderDetailDto> {
        match self.uow.order_details().update(dto.into_entity()).await {
            Ok(detail) => Outcome::success(OrderDetailDto::from_entity(detail)),
            Err(error) => storage_failure(error),
        }
    }

    /// Removes an order line and returns it; absence is a `404` failure.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Outcome<OrderDetailDto> {
        match self.uow.order_details().delete(id).await {
            Ok(Some(detail)) => Outcome::success(OrderDetailDto::from_entity(detail)),
            Ok(None) => {
                Outcome::failure_with(format!("Order detail not found: {}", id), Status::NotFound)
            }
            Err(error) => storage_failure(error),
        }
    }
}
