//! The persisted entity catalog.
//!
//! Every entity implements [`entity_store::Entity`], so the generic
//! repositories serve all of them from the same code path.

mod branch;
mod company;
mod department;
mod order;
mod order_detail;
mod product;
mod product_unit;
mod unit;

pub use branch::Branch;
pub use company::Company;
pub use department::Department;
pub use order::Order;
pub use order_detail::OrderDetail;
pub use product::Product;
pub use product_unit::ProductUnit;
pub use unit::Unit;
