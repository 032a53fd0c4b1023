//! One repository accessor per entity type over a single storage session.

use std::sync::Arc;

use entity_store::{InMemoryRepository, PgRepository, Repository};
use sqlx::PgPool;

use crate::entities::{Branch, Company, Department, Order, OrderDetail, Product, ProductUnit, Unit};
use crate::repository::{OrderDetailRepository, OrderRepository};

/// The unit of work: one repository per entity type, all constructed over
/// the same storage session.
///
/// Orchestration code takes this single dependency instead of one
/// repository per entity. The shared session is a connection pool, not a
/// transaction; each repository call still commits independently.
pub struct UnitOfWork {
    branches: Arc<dyn Repository<Branch>>,
    companies: Arc<dyn Repository<Company>>,
    departments: Arc<dyn Repository<Department>>,
    products: Arc<dyn Repository<Product>>,
    units: Arc<dyn Repository<Unit>>,
    product_units: Arc<dyn Repository<ProductUnit>>,
    orders: Arc<dyn OrderRepository>,
    order_details: Arc<dyn OrderDetailRepository>,
}

impl UnitOfWork {
    /// Builds the unit of work over one shared Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            branches: Arc::new(PgRepository::<Branch>::new(pool.clone())),
            companies: Arc::new(PgRepository::<Company>::new(pool.clone())),
            departments: Arc::new(PgRepository::<Department>::new(pool.clone())),
            products: Arc::new(PgRepository::<Product>::new(pool.clone())),
            units: Arc::new(PgRepository::<Unit>::new(pool.clone())),
            product_units: Arc::new(PgRepository::<ProductUnit>::new(pool.clone())),
            orders: Arc::new(PgRepository::<Order>::new(pool.clone())),
            order_details: Arc::new(PgRepository::<OrderDetail>::new(pool)),
        }
    }

    /// Builds the unit of work over fresh in-memory tables.
    pub fn in_memory() -> Self {
        Self::with_order_repositories(
            Arc::new(InMemoryRepository::<Order>::new()),
            Arc::new(InMemoryRepository::<OrderDetail>::new()),
        )
    }

    /// Builds an in-memory unit of work around caller-supplied order-side
    /// repositories, so tests can keep handles for inspection and failure
    /// injection.
    pub fn with_order_repositories(
        orders: Arc<dyn OrderRepository>,
        order_details: Arc<dyn OrderDetailRepository>,
    ) -> Self {
        Self {
            branches: Arc::new(InMemoryRepository::<Branch>::new()),
            companies: Arc::new(InMemoryRepository::<Company>::new()),
            departments: Arc::new(InMemoryRepository::<Department>::new()),
            products: Arc::new(InMemoryRepository::<Product>::new()),
            units: Arc::new(InMemoryRepository::<Unit>::new()),
            product_units: Arc::new(InMemoryRepository::<ProductUnit>::new()),
            orders,
            order_details,
        }
    }

    /// The branch repository.
    pub fn branches(&self) -> &dyn Repository<Branch> {
        self.branches.as_ref()
    }

    /// The company repository.
    pub fn companies(&self) -> &dyn Repository<Company> {
        self.companies.as_ref()
    }

    /// The department repository.
    pub fn departments(&self) -> &dyn Repository<Department> {
        self.departments.as_ref()
    }

    /// The product repository.
    pub fn products(&self) -> &dyn Repository<Product> {
        self.products.as_ref()
    }

    /// The unit-of-measure repository.
    pub fn units(&self) -> &dyn Repository<Unit> {
        self.units.as_ref()
    }

    /// The product-unit repository.
    pub fn product_units(&self) -> &dyn Repository<ProductUnit> {
        self.product_units.as_ref()
    }

    /// The order repository, including its user query.
    pub fn orders(&self) -> &dyn OrderRepository {
        self.orders.as_ref()
    }

    /// The order-detail repository, including its order query.
    pub fn order_details(&self) -> &dyn OrderDetailRepository {
        self.order_details.as_ref()
    }
}
