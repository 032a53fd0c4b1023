use common::EntityId;
use entity_store::{Entity, PgQuery};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// A department within a branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub branch_id: Option<EntityId>,
}

impl Department {
    /// Creates a department with an unassigned id and no branch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::nil(),
            name: name.into(),
            branch_id: None,
        }
    }
}

impl Entity for Department {
    const TABLE: &'static str = "departments";
    const KIND: &'static str = "Department";
    const COLUMNS: &'static [&'static str] = &["name", "branch_id"];

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
            branch_id: row
                .try_get::<Option<Uuid>, _>("branch_id")?
                .map(EntityId::from_uuid),
        })
    }

    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.branch_id.map(|id| id.as_uuid()))
    }
}
