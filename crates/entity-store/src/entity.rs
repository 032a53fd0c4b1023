use common::EntityId;
use sqlx::Postgres;
use sqlx::postgres::{PgArguments, PgRow};

/// A single-statement query with bound arguments against Postgres.
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// Table metadata and row mapping for a persisted entity type.
///
/// The generic repositories assemble their SQL from `TABLE` and `COLUMNS`
/// and delegate value binding and row decoding to the entity itself, so a
/// single repository implementation serves every entity type.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Table name.
    const TABLE: &'static str;

    /// Entity kind used in error and log text.
    const KIND: &'static str;

    /// Non-id column names, in the order [`Entity::bind`] pushes values.
    const COLUMNS: &'static [&'static str];

    /// The entity's identity.
    fn id(&self) -> EntityId;

    /// Returns the entity with its identity replaced.
    fn with_id(self, id: EntityId) -> Self;

    /// Decodes one row into the entity. Rows carry `id` plus `COLUMNS`.
    fn from_row(row: &PgRow) -> sqlx::Result<Self>;

    /// Binds the non-id column values onto `query`, in `COLUMNS` order.
    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;
}
