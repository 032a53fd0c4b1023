//! Shared value types for the retail order backend.

pub mod ids;
pub mod money;
pub mod outcome;

pub use ids::EntityId;
pub use money::Money;
pub use outcome::{Outcome, Status};
