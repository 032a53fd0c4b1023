//! Checkout coordinator that turns a submitted cart into an order.

use std::sync::Arc;

use common::{EntityId, Outcome, Status};
use domain::{CartSubmission, OrderDetailService, OrderService, UnitOfWork};

/// Orchestrates the two-phase checkout write: one order header, then one
/// order-detail row per cart line.
///
/// Line writes are best effort. A failed line does not roll back the
/// header or the lines that already landed; every line is attempted and
/// the failures are reported in one aggregate message.
pub struct CheckoutCoordinator {
    orders: OrderService,
    order_details: OrderDetailService,
}

impl CheckoutCoordinator {
    /// Creates a coordinator whose services share one unit of work.
    pub fn new(uow: Arc<UnitOfWork>) -> Self {
        Self {
            orders: OrderService::new(Arc::clone(&uow)),
            order_details: OrderDetailService::new(uow),
        }
    }

    /// Processes a cart submission into an order header plus its lines.
    ///
    /// Returns the new order's id on success. Carts whose line arrays are
    /// missing or of mismatched lengths are rejected before any write.
    #[tracing::instrument(skip(self, submission), fields(user_id = %submission.user_id))]
    pub async fn process_cart(&self, submission: &CartSubmission) -> Outcome<EntityId> {
        metrics::counter!("checkout_executions_total").increment(1);
        let start = std::time::Instant::now();

        // 1. Validate the cart shape before touching storage
        let Some(line_count) = submission.line_count() else {
            metrics::counter!("checkout_failed").increment(1);
            return Outcome::failure_with(
                "Cart line arrays are missing or have mismatched lengths",
                Status::BadRequest,
            );
        };

        // 2. Write the order header
        let order = match self.orders.create(submission.header()).await {
            Outcome::Success { data, .. } => data,
            failure => {
                metrics::counter!("checkout_failed").increment(1);
                metrics::histogram!("checkout_duration_seconds")
                    .record(start.elapsed().as_secs_f64());
                return failure.map(|order| order.id);
            }
        };

        // 3. Write every line, collecting failures instead of stopping
        let mut failures: Vec<String> = Vec::new();
        for line in submission.lines(order.id) {
            if let Outcome::Failure { message, .. } = self.order_details.create(line).await {
                failures.push(message);
            }
        }

        // 4. Report the aggregate result
        metrics::histogram!("checkout_duration_seconds").record(start.elapsed().as_secs_f64());
        if let Some(first) = failures.first() {
            metrics::counter!("checkout_failed").increment(1);
            tracing::warn!(
                order_id = %order.id,
                failed = failures.len(),
                line_count,
                "checkout wrote a partial order"
            );
            return Outcome::failure_with(
                format!(
                    "Failed to create {} order details. First error: {}",
                    failures.len(),
                    first
                ),
                Status::Internal,
            );
        }

        let duration = start.elapsed().as_secs_f64();
        metrics::counter!("checkout_completed").increment(1);
        tracing::info!(order_id = %order.id, line_count, duration, "checkout completed");
        Outcome::success_with(order.id, "Order processed successfully")
    }
}
