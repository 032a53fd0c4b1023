use async_trait::async_trait;
use common::EntityId;

use crate::Result;

/// Insert capability for an entity type.
///
/// All capability traits are independent so an adapter can expose a
/// partial surface, but storage backends implement all five and pick up
/// the composed [`Repository`] bundle through its blanket impl.
#[async_trait]
pub trait Create<T>: Send + Sync {
    /// Inserts the entity and returns it with its generated identity
    /// populated. A nil incoming id is replaced with a fresh one.
    async fn create(&self, entity: T) -> Result<T>;
}

/// Read-by-id capability for an entity type.
#[async_trait]
pub trait GetById<T>: Send + Sync {
    /// Fetches one row. Absence is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>>;
}

/// Read-all capability for an entity type.
#[async_trait]
pub trait GetAll<T>: Send + Sync {
    /// Fetches every row, ordered by id for a stable result.
    async fn get_all(&self) -> Result<Vec<T>>;
}

/// Update capability for an entity type.
#[async_trait]
pub trait Update<T>: Send + Sync {
    /// Rewrites the row matching the entity's id. A missing row is
    /// signaled as `StoreError::NotFound`, never a silent no-op.
    async fn update(&self, entity: T) -> Result<T>;
}

/// Delete capability for an entity type.
#[async_trait]
pub trait Delete<T>: Send + Sync {
    /// Removes the row and returns the removed entity, or `Ok(None)` if
    /// no row existed.
    async fn delete(&self, id: EntityId) -> Result<Option<T>>;
}

/// The full capability bundle every entity repository exposes.
pub trait Repository<T>: Create<T> + GetById<T> + GetAll<T> + Update<T> + Delete<T> {}

// Blanket implementation for anything providing all five capabilities
impl<R, T> Repository<T> for R where
    R: Create<T> + GetById<T> + GetAll<T> + Update<T> + Delete<T> + ?Sized
{
}
