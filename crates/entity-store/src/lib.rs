pub mod config;
pub mod entity;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use common::EntityId;
pub use config::StoreConfig;
pub use entity::{Entity, PgQuery};
pub use error::{Result, StoreError};
pub use memory::InMemoryRepository;
pub use postgres::{PgRepository, run_migrations};
pub use repository::{Create, Delete, GetAll, GetById, Repository, Update};
