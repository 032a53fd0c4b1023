//! Checkout use case wrapping the coordinator behind a caller guard.

use std::sync::Arc;

use common::{EntityId, Outcome, Status};
use domain::{CartSubmission, UnitOfWork};

use crate::coordinator::CheckoutCoordinator;

/// The checkout entry point callers talk to.
///
/// Rejects submissions without a known user before the coordinator runs,
/// and logs the outcome of every attempt on both paths.
pub struct CheckoutService {
    coordinator: CheckoutCoordinator,
}

impl CheckoutService {
    /// Creates the service over one unit of work.
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            coordinator: CheckoutCoordinator::new(uow),
        }
    }

    /// Runs checkout for one submitted cart.
    #[tracing::instrument(skip(self, submission), fields(user_id = %submission.user_id))]
    pub async fn checkout(&self, submission: &CartSubmission) -> Outcome<EntityId> {
        if submission.user_id.trim().is_empty() {
            tracing::warn!("checkout rejected: user id is missing");
            return Outcome::failure_with("User id is required", Status::BadRequest);
        }

        let outcome = self.coordinator.process_cart(submission).await;
        match &outcome {
            Outcome::Success { data, .. } => {
                tracing::info!(order_id = %data, user_id = %submission.user_id, "checkout succeeded");
            }
            Outcome::Failure { message, status } => {
                tracing::warn!(%status, %message, "checkout failed");
            }
        }
        outcome
    }
}
