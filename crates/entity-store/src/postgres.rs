use std::marker::PhantomData;

use async_trait::async_trait;
use common::EntityId;
use sqlx::PgPool;

use crate::{
    Result, StoreError,
    entity::Entity,
    repository::{Create, Delete, GetAll, GetById, Update},
};

/// PostgreSQL-backed repository, generic over the entity type.
///
/// SQL is assembled at call time from the entity's table metadata; value
/// binding and row decoding are delegated to the [`Entity`] implementation.
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> PgRepository<T> {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (0..T::COLUMNS.len())
            .map(|i| format!("${}", i + 2))
            .collect();
        format!(
            "INSERT INTO {} (id, {}) VALUES ($1, {})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 2))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE id = $1",
            T::TABLE,
            assignments.join(", ")
        )
    }
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity> Create<T> for PgRepository<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let entity = if entity.id().is_nil() {
            entity.with_id(EntityId::new())
        } else {
            entity
        };

        let sql = Self::insert_sql();
        let query = sqlx::query(&sql).bind(entity.id().as_uuid());
        entity.bind(query).execute(&self.pool).await?;
        Ok(entity)
    }
}

#[async_trait]
impl<T: Entity> GetById<T> for PgRepository<T> {
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>> {
        let sql = format!("{} WHERE id = $1", Self::select_sql());
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<T: Entity> GetAll<T> for PgRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        let sql = format!("{} ORDER BY id ASC", Self::select_sql());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(|row| Ok(T::from_row(row)?)).collect()
    }
}

#[async_trait]
impl<T: Entity> Update<T> for PgRepository<T> {
    async fn update(&self, entity: T) -> Result<T> {
        let sql = Self::update_sql();
        let query = sqlx::query(&sql).bind(entity.id().as_uuid());
        let result = entity.bind(query).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: entity.id(),
            });
        }
        Ok(entity)
    }
}

#[async_trait]
impl<T: Entity> Delete<T> for PgRepository<T> {
    async fn delete(&self, id: EntityId) -> Result<Option<T>> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, {}",
            T::TABLE,
            T::COLUMNS.join(", ")
        );
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }
}

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
