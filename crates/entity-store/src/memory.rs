use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    entity::Entity,
    repository::{Create, Delete, GetAll, GetById, Update},
};

struct State<T> {
    rows: HashMap<EntityId, T>,
    create_calls: usize,
    fail_all: bool,
    fail_creates: HashSet<usize>,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            create_calls: 0,
            fail_all: false,
            fail_creates: HashSet::new(),
        }
    }
}

/// In-memory repository implementation for testing and local development.
///
/// Provides the same capability surface as the PostgreSQL implementation,
/// plus failure injection so orchestration tests can simulate storage
/// outages on chosen calls.
pub struct InMemoryRepository<T> {
    state: Arc<RwLock<State<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    /// Returns the number of rows stored.
    pub async fn row_count(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Returns how many create calls were made, failed ones included.
    pub async fn create_calls(&self) -> usize {
        self.state.read().await.create_calls
    }

    /// Makes every call fail until reset, simulating an offline backend.
    pub async fn set_fail_all(&self, fail: bool) {
        self.state.write().await.fail_all = fail;
    }

    /// Makes the n-th create call (0-based, counted from construction) fail.
    pub async fn fail_on_create(&self, call: usize) {
        self.state.write().await.fail_creates.insert(call);
    }

    /// Clears all rows and failure injection state.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.rows.clear();
        state.create_calls = 0;
        state.fail_all = false;
        state.fail_creates.clear();
    }

    fn offline() -> StoreError {
        StoreError::Unavailable(format!("{} store is offline", T::KIND))
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Create<T> for InMemoryRepository<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut state = self.state.write().await;
        let call = state.create_calls;
        state.create_calls += 1;

        if state.fail_all {
            return Err(Self::offline());
        }
        if state.fail_creates.contains(&call) {
            return Err(StoreError::Unavailable(format!(
                "{} store rejected create call {}",
                T::KIND,
                call
            )));
        }

        let entity = if entity.id().is_nil() {
            entity.with_id(EntityId::new())
        } else {
            entity
        };
        state.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl<T: Entity> GetById<T> for InMemoryRepository<T> {
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>> {
        let state = self.state.read().await;
        if state.fail_all {
            return Err(Self::offline());
        }
        Ok(state.rows.get(&id).cloned())
    }
}

#[async_trait]
impl<T: Entity> GetAll<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        let state = self.state.read().await;
        if state.fail_all {
            return Err(Self::offline());
        }

        let mut rows: Vec<T> = state.rows.values().cloned().collect();
        rows.sort_by_key(|entity| entity.id().as_uuid());
        Ok(rows)
    }
}

#[async_trait]
impl<T: Entity> Update<T> for InMemoryRepository<T> {
    async fn update(&self, entity: T) -> Result<T> {
        let mut state = self.state.write().await;
        if state.fail_all {
            return Err(Self::offline());
        }
        if !state.rows.contains_key(&entity.id()) {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: entity.id(),
            });
        }
        state.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl<T: Entity> Delete<T> for InMemoryRepository<T> {
    async fn delete(&self, id: EntityId) -> Result<Option<T>> {
        let mut state = self.state.write().await;
        if state.fail_all {
            return Err(Self::offline());
        }
        Ok(state.rows.remove(&id))
    }
}
