use common::EntityId;
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;

/// A unit of measure products are sold in.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
}

impl Unit {
    /// Creates a unit with an unassigned id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::nil(),
            name: name.into(),
        }
    }
}

impl Entity for Unit {
    const TABLE: &'static str = "units";
    const KIND: &'static str = "Unit";
    const COLUMNS: &'static [&'static str] = &["name"];

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
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.clone())
    }
}
