use chrono::{DateTime, Utc};
use common::{EntityId, Money};
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// An order header, written exactly once per successful checkout.
///
/// Totals are caller-supplied and trusted as given; nothing recomputes
/// them from the order's lines. The company reference is optional, as is
/// the human-facing order number.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: EntityId,
    pub order_number: Option<String>,
    pub order_type: Option<String>,
    pub total_amount: Money,
    pub discount: Money,
    pub total_after_discount: Money,
    pub branch_id: EntityId,
    pub company_id: Option<EntityId>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Order {
    const TABLE: &'static str = "orders";
    const KIND: &'static str = "Order";
    const COLUMNS: &'static [&'static str] = &[
        "order_number",
        "order_type",
        "total_amount",
        "discount",
        "total_after_discount",
        "branch_id",
        "company_id",
        "user_id",
        "created_at",
    ];

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: EntityId::from_uuid(row.try_get("id")?),
            order_number: row.try_get("order_number")?,
            order_type: row.try_get("order_type")?,
            total_amount: Money::from_cents(row.try_get("total_amount")?),
            discount: Money::from_cents(row.try_get("discount")?),
            total_after_discount: Money::from_cents(row.try_get("total_after_discount")?),
            branch_id: EntityId::from_uuid(row.try_get("branch_id")?),
            company_id: row
                .try_get::<Option<Uuid>, _>("company_id")?
                .map(EntityId::from_uuid),
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.order_number.clone())
            .bind(self.order_type.clone())
            .bind(self.total_amount.cents())
            .bind(self.discount.cents())
            .bind(self.total_after_discount.cents())
            .bind(self.branch_id.as_uuid())
            .bind(self.company_id.map(|id| id.as_uuid()))
            .bind(self.user_id.clone())
            .bind(self.created_at)
    }
}
