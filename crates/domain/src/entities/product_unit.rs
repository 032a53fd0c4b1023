use common::{EntityId, Money};
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;

/// A product priced in a particular unit of measure.
///
/// Order lines reference product units rather than bare products, so one
/// product can carry several sellable packagings with their own prices.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUnit {
    pub id: EntityId,
    pub product_id: EntityId,
    pub unit_id: EntityId,
    pub price: Money,
    pub quantity_per_unit: i32,
}

impl ProductUnit {
    /// Creates a product unit with an unassigned id.
    pub fn new(product_id: EntityId, unit_id: EntityId, price: Money, quantity_per_unit: i32) -> Self {
        Self {
            id: EntityId::nil(),
            product_id,
            unit_id,
            price,
            quantity_per_unit,
        }
    }
}

impl Entity for ProductUnit {
    const TABLE: &'static str = "product_units";
    const KIND: &'static str = "Product unit";
    const COLUMNS: &'static [&'static str] =
        &["product_id", "unit_id", "price", "quantity_per_unit"];

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
            product_id: EntityId::from_uuid(row.try_get("product_id")?),
            unit_id: EntityId::from_uuid(row.try_get("unit_id")?),
            price: Money::from_cents(row.try_get("price")?),
            quantity_per_unit: row.try_get("quantity_per_unit")?,
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.product_id.as_uuid())
            .bind(self.unit_id.as_uuid())
            .bind(self.price.cents())
            .bind(self.quantity_per_unit)
    }
}
