use common::EntityId;
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// A branch location, optionally belonging to a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub company_id: Option<EntityId>,
}

impl Branch {
    /// Creates a branch with an unassigned id and no company.
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
            company_id: None,
        }
    }
}

impl Entity for Branch {
    const TABLE: &'static str = "branches";
    const KIND: &'static str = "Branch";
    const COLUMNS: &'static [&'static str] = &["name", "address", "phone", "company_id"];

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
            company_id: row
                .try_get::<Option<Uuid>, _>("company_id")?
                .map(EntityId::from_uuid),
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.address.clone())
            .bind(self.phone.clone())
            .bind(self.company_id.map(|id| id.as_uuid()))
    }
}
