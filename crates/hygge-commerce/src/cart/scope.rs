//! Scope-guarded access to the cart store.
//!
//! The store is constructed once at the composition root inside a
//! `CartScope` and reached everywhere else through `CartHandle`s. Using a
//! handle after its scope has been torn down is a programming error, not a
//! user-facing condition, and panics immediately rather than silently
//! defaulting.

use crate::cart::{CartLineItem, CartStore};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owner of the cart store for the lifetime of a session.
///
/// Dropping the scope tears the store down; any surviving handle panics
/// on its next use.
#[derive(Debug)]
pub struct CartScope {
    store: Rc<RefCell<CartStore>>,
}

impl CartScope {
    /// Create a scope owning a fresh empty store.
    pub fn new(store: CartStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Hand out a guarded handle to the store.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Rc::downgrade(&self.store),
        }
    }
}

impl Default for CartScope {
    fn default() -> Self {
        Self::new(CartStore::default())
    }
}

/// A guarded reference to the scoped cart store.
///
/// Every accessor panics if the owning `CartScope` has been dropped.
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Weak<RefCell<CartStore>>,
}

impl CartHandle {
    fn with<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        let store = self
            .store
            .upgrade()
            .expect("cart accessed outside an active CartScope");
        let mut store = store.borrow_mut();
        f(&mut store)
    }

    /// Add one unit of a product to the cart.
    pub fn add(&self, product: &Product) {
        self.with(|s| s.add(product));
    }

    /// Add `quantity` units of a product.
    pub fn add_with_quantity(&self, product: &Product, quantity: i64) {
        self.with(|s| s.add_with_quantity(product, quantity));
    }

    /// Remove a product's line. No-op if absent.
    pub fn remove(&self, product_id: &ProductId) {
        self.with(|s| s.remove(product_id));
    }

    /// Replace a line's quantity; 0 or less removes the line.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: i64) {
        self.with(|s| s.set_quantity(product_id, quantity));
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.with(|s| s.clear());
    }

    /// Sum of all line quantities.
    pub fn count(&self) -> i64 {
        self.with(|s| s.count())
    }

    /// Monetary total of the cart.
    pub fn total(&self) -> Money {
        self.with(|s| s.total())
    }

    /// Value copy of the current line items.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.with(|s| s.items().to_vec())
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with(|s| s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            "Test",
            Money::new(cents, Currency::USD),
            format!("/img/{id}.jpg"),
        )
    }

    #[test]
    fn test_handle_reads_and_writes_through_scope() {
        let scope = CartScope::default();
        let handle = scope.handle();

        handle.add(&product("1", 1000));
        handle.add(&product("1", 1000));

        assert_eq!(handle.count(), 2);
        assert_eq!(handle.total().amount_cents, 2000);

        let other = scope.handle();
        assert_eq!(other.count(), 2);
    }

    #[test]
    #[should_panic(expected = "outside an active CartScope")]
    fn test_handle_panics_after_scope_teardown() {
        let scope = CartScope::default();
        let handle = scope.handle();
        drop(scope);
        handle.count();
    }
}
