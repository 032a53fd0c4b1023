use common::EntityId;
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// A sellable product, optionally assigned to a department.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub barcode: Option<String>,
    pub department_id: Option<EntityId>,
}

impl Product {
    /// Creates a product with an unassigned id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::nil(),
            name: name.into(),
            barcode: None,
            department_id: None,
        }
    }
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const KIND: &'static str = "Product";
    const COLUMNS: &'static [&'static str] = &["name", "barcode", "department_id"];

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
            name: row.try_get("name")?,
            barcode: row.try_get("barcode")?,
            department_id: row
                .try_get::<Option<Uuid>, _>("department_id")?
                .map(EntityId::from_uuid),
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.barcode.clone())
            .bind(self.department_id.map(|id| id.as_uuid()))
    }
}
