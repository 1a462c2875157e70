//! Shopping cart module.
//!
//! `CartStore` holds the authoritative line-item collection; `CartScope`
//! owns the store for the lifetime of a session and hands out guarded
//! handles to it.

mod scope;
mod store;

pub use scope::{CartHandle, CartScope};
pub use store::{CartLineItem, CartStore};
