use common::EntityId;
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;

/// A company owning one or more branches.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Company {
    /// Creates a company with an unassigned id.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::nil(),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

impl Entity for Company {
    const TABLE: &'static str = "companies";
    const KIND: &'static str = "Company";
    const COLUMNS: &'static [&'static str] = &["name", "address", "phone"];

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
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.address.clone())
            .bind(self.phone.clone())
    }
}
