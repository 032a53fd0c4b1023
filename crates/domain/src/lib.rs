//! Domain layer for the retail order backend.
//!
//! This crate provides:
//! - the persisted entity catalog with its table metadata
//! - the wire DTOs and the cart submission shape
//! - the unit of work aggregating one repository per entity type
//! - the order and order-detail services translating DTO to entity

pub mod dto;
pub mod entities;
pub mod repository;
pub mod service;
pub mod unit_of_work;

pub use dto::{CartSubmission, OrderDetailDto, OrderDto};
pub use entities::{Branch, Company, Department, Order, OrderDetail, Product, ProductUnit, Unit};
pub use repository::{OrderDetailQueries, OrderDetailRepository, OrderQueries, OrderRepository};
pub use service::{OrderDetailService, OrderService};
pub use unit_of_work::UnitOfWork;
