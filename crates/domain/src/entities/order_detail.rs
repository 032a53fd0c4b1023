use common::{EntityId, Money};
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;

/// One order line, written after its header so the back-reference is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_unit_id: EntityId,
    pub quantity: i32,
    pub line_total: Money,
    pub description: String,
}

impl Entity for OrderDetail {
    const TABLE: &'static str = "order_details";
    const KIND: &'static str = "Order detail";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "product_unit_id",
        "quantity",
        "line_total",
        "description",
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
            order_id: EntityId::from_uuid(row.try_get("order_id")?),
            product_unit_id: EntityId::from_uuid(row.try_get("product_unit_id")?),
            quantity: row.try_get("quantity")?,
            line_total: Money::from_cents(row.try_get("line_total")?),
            description: row.try_get("description")?,
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.order_id.as_uuid())
            .bind(self.product_unit_id.as_uuid())
            .bind(self.quantity)
            .bind(self.line_total.cents())
            .bind(self.description.clone())
    }
}
