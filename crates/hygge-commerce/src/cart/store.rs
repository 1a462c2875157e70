//! Cart store and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Display metadata is copied from the catalog at add-time and is not
/// re-synced if the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at add-time.
    pub unit_price: Money,
    /// Primary image reference.
    pub image: String,
    /// Quantity, always >= 1. A line that would reach 0 is removed instead.
    pub quantity: i64,
}

impl CartLineItem {
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Total price for this line (unit_price * quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// The authoritative cart line-item collection.
///
/// Lines are kept in insertion order for display. All mutations are total:
/// removing an absent line or setting quantity on one is a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Inserts a new line with quantity 1 if no line matches the product,
    /// otherwise increments the existing line's quantity.
    pub fn add(&mut self, product: &Product) {
        self.add_with_quantity(product, 1);
    }

    /// Add `quantity` units of a product. Quantities <= 0 are ignored.
    pub fn add_with_quantity(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartLineItem::from_product(product, quantity));
        }
        tracing::debug!(product = %product.id, quantity, "cart item added");
    }

    /// Remove the line for a product. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of 0 or less removes the line. No-op if the line does
    /// not exist.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of all line quantities (0 for an empty cart).
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum over all lines of unit_price * quantity (zero for an empty cart).
    pub fn total(&self) -> Money {
        let line_totals: Vec<Money> = self.items.iter().map(|i| i.line_total()).collect();
        Money::sum(line_totals.iter(), self.currency)
    }

    /// Current line items, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_cart() {
        let cart = CartStore::default();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_add_twice_merges_lines() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartStore::default();
        cart.add(&product("a", 100));
        cart.add(&product("b", 200));
        cart.add(&product("a", 100));

        let ids: Vec<_> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        cart.add(&p);
        cart.set_quantity(&p.id, 5);

        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total().amount_cents, 5000);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        cart.add(&p);
        cart.set_quantity(&p.id, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total().amount_cents, 0);
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        cart.add(&p);
        cart.set_quantity(&p.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_line_is_noop() {
        let mut cart = CartStore::default();
        cart.add(&product("1", 1000));
        cart.set_quantity(&ProductId::new("missing"), 7);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        cart.add(&p);
        cart.remove(&p.id);
        let snapshot = cart.clone();
        cart.remove(&p.id);
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_set_quantity_round_trip() {
        let mut cart = CartStore::default();
        let p = product("1", 1000);
        for _ in 0..4 {
            cart.add(&p);
        }
        cart.set_quantity(&p.id, 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::default();
        cart.add(&product("1", 1000));
        cart.add(&product("2", 2000));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invariants_hold_after_mutation_sequence() {
        let mut cart = CartStore::default();
        let a = product("a", 999);
        let b = product("b", 1500);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);
        cart.set_quantity(&b.id, 3);
        cart.remove(&ProductId::new("missing"));
        cart.add_with_quantity(&b, 2);

        for item in cart.items() {
            assert!(item.quantity >= 1);
            assert!(!item.unit_price.is_negative());
        }
        let ids: std::collections::HashSet<_> =
            cart.items().iter().map(|i| i.product_id.clone()).collect();
        assert_eq!(ids.len(), cart.items().len());
        assert_eq!(
            cart.count(),
            cart.items().iter().map(|i| i.quantity).sum::<i64>()
        );
        assert_eq!(
            cart.total().amount_cents,
            cart.items()
                .iter()
                .map(|i| i.unit_price.amount_cents * i.quantity)
                .sum::<i64>()
        );
    }

    #[test]
    fn test_add_copies_metadata_at_add_time() {
        let mut cart = CartStore::default();
        let mut p = product("1", 1000);
        cart.add(&p);
        p.name = "Renamed".to_string();
        assert_eq!(cart.items()[0].name, "Product 1");
    }
}
