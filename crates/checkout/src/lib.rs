//! Checkout pipeline for submitted carts.
//!
//! This crate turns a [`domain::CartSubmission`] into a persisted order
//! header plus its order-detail lines:
//! 1. Validate the cart's line arrays
//! 2. Write the order header
//! 3. Write every line, best effort
//!
//! A failed line never rolls back the header; failures are collected and
//! reported in one aggregate message.

pub mod coordinator;
pub mod service;

pub use coordinator::CheckoutCoordinator;
pub use service::CheckoutService;
