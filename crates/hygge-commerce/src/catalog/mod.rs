//! Product catalog module.
//!
//! The catalog is a static, read-only lookup table loaded once at startup.

mod product;

pub use product::{Catalog, Product};
