use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a persisted entity.
///
/// Wraps a UUID to provide type safety and prevent mixing up entity ids
/// with other UUID-based values. The nil UUID means "not assigned yet":
/// the store replaces it with a fresh id on create, and callers use it as
/// the sentinel for an absent reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a new random entity id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil id, treated as "unassigned" by the store.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Creates an entity id from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if this is the nil id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::nil()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
