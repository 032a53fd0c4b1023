//! Wire-level shapes exchanged with callers.
//!
//! DTOs carry optional identity fields so a create request can omit them;
//! the mapping into an entity fills the creation timestamp, and the store
//! replaces a nil id with a fresh one.

use chrono::{DateTime, Utc};
use common::{EntityId, Money};
use serde::{Deserialize, Serialize};

use crate::entities::{Order, OrderDetail};

/// An order header as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(default)]
    pub id: EntityId,
    pub order_number: Option<String>,
    pub order_type: Option<String>,
    pub total_amount: Money,
    pub discount: Money,
    pub total_after_discount: Money,
    pub branch_id: EntityId,
    pub company_id: Option<EntityId>,
    pub user_id: String,
    /// Filled with the current time when absent on create.
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderDto {
    /// Maps a stored order back into its wire shape.
    pub fn from_entity(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            order_type: order.order_type,
            total_amount: order.total_amount,
            discount: order.discount,
            total_after_discount: order.total_after_discount,
            branch_id: order.branch_id,
            company_id: order.company_id,
            user_id: order.user_id,
            created_at: Some(order.created_at),
        }
    }

    /// Maps the wire shape into a storable order.
    pub fn into_entity(self) -> Order {
        Order {
            id: self.id,
            order_number: self.order_number,
            order_type: self.order_type,
            total_amount: self.total_amount,
            discount: self.discount,
            total_after_discount: self.total_after_discount,
            branch_id: self.branch_id,
            company_id: self.company_id,
            user_id: self.user_id,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// An order line as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailDto {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub order_id: EntityId,
    pub product_unit_id: EntityId,
    pub quantity: i32,
    pub line_total: Money,
    pub description: String,
}

impl OrderDetailDto {
    /// Maps a stored order line back into its wire shape.
    pub fn from_entity(detail: OrderDetail) -> Self {
        Self {
            id: detail.id,
            order_id: detail.order_id,
            product_unit_id: detail.product_unit_id,
            quantity: detail.quantity,
            line_total: detail.line_total,
            description: detail.description,
        }
    }

    /// Maps the wire shape into a storable order line.
    pub fn into_entity(self) -> OrderDetail {
        OrderDetail {
            id: self.id,
            order_id: self.order_id,
            product_unit_id: self.product_unit_id,
            quantity: self.quantity,
            line_total: self.line_total,
            description: self.description,
        }
    }
}

/// A checkout input: parallel line arrays plus header totals and context.
///
/// `product_unit_ids`, `quantities` and `line_totals` must all be present
/// with equal lengths for the submission to be processable; `descriptions`
/// is optional per index. Index `i` across the arrays describes line `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSubmission {
    pub product_unit_ids: Option<Vec<EntityId>>,
    pub quantities: Option<Vec<i32>>,
    pub line_totals: Option<Vec<Money>>,
    pub descriptions: Option<Vec<String>>,
    pub branch_id: EntityId,
    pub company_id: Option<EntityId>,
    pub user_id: String,
    pub order_type: Option<String>,
    pub order_number: Option<String>,
    pub total_amount: Money,
    pub discount: Money,
    pub total_after_discount: Money,
}

impl CartSubmission {
    /// The number of cart lines, when the three required arrays are present
    /// with matching lengths. Length comparisons only; no per-line scan.
    pub fn line_count(&self) -> Option<usize> {
        let ids = self.product_unit_ids.as_ref()?;
        let quantities = self.quantities.as_ref()?;
        let totals = self.line_totals.as_ref()?;

        (ids.len() == quantities.len() && ids.len() == totals.len()).then_some(ids.len())
    }

    /// Builds the order header from the submission's totals and context.
    ///
    /// The nil company sentinel and an empty order number both coerce to
    /// absent; the creation timestamp is left for the entity mapping.
    pub fn header(&self) -> OrderDto {
        OrderDto {
            id: EntityId::nil(),
            order_number: self.order_number.clone().filter(|number| !number.is_empty()),
            order_type: self.order_type.clone(),
            total_amount: self.total_amount,
            discount: self.discount,
            total_after_discount: self.total_after_discount,
            branch_id: self.branch_id,
            company_id: self.company_id.filter(|id| !id.is_nil()),
            user_id: self.user_id.clone(),
            created_at: None,
        }
    }

    /// Builds one line DTO per index, referencing the created order header.
    /// A missing description defaults to the empty string. Returns an empty
    /// vec when the required arrays are absent.
    pub fn lines(&self, order_id: EntityId) -> Vec<OrderDetailDto> {
        let (Some(ids), Some(quantities), Some(totals)) = (
            self.product_unit_ids.as_ref(),
            self.quantities.as_ref(),
            self.line_totals.as_ref(),
        ) else {
            return Vec::new();
        };

        ids.iter()
            .zip(quantities.iter())
            .zip(totals.iter())
            .enumerate()
            .map(|(index, ((product_unit_id, quantity), line_total))| OrderDetailDto {
                id: EntityId::nil(),
                order_id,
                product_unit_id: *product_unit_id,
                quantity: *quantity,
                line_total: *line_total,
                description: self
                    .descriptions
                    .as_ref()
                    .and_then(|descriptions| descriptions.get(index))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}
