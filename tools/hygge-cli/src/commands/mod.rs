//! CLI command implementations.

pub mod catalog;
pub mod order;

pub use catalog::CatalogArgs;
pub use order::OrderArgs;
