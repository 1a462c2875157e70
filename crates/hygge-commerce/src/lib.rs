//! Storefront domain logic for the Hygge demo shop.
//!
//! This crate provides the stateful core of a client-side storefront:
//!
//! - **Catalog**: static, read-only product lookup table
//! - **Cart**: scope-guarded cart store with line items and derived totals
//! - **Checkout**: three-step wizard with validation, totals, and order
//!   finalization
//! - **Nav**: the navigation boundary the workflow hands control to
//!
//! # Example
//!
//! ```rust,ignore
//! use hygge_commerce::prelude::*;
//!
//! let scope = CartScope::default();
//! let cart = scope.handle();
//! cart.add(&product);
//!
//! let mut flow = CheckoutFlow::new(scope.handle());
//! flow.edit(Field::FirstName, "John");
//! // ... fill the remaining fields, advance through the steps ...
//! flow.submit(&mut navigator).await?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod nav;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{CartHandle, CartLineItem, CartScope, CartStore};

    // Checkout
    pub use crate::checkout::{
        CheckoutDraft, CheckoutFlow, CheckoutGate, CheckoutStep, CheckoutTotals, Field,
        FieldErrors, OrderSnapshot, OrderStatus, PaymentMethod, PaymentStatus,
        ShippingAddress, ShippingMethod,
    };

    // Navigation
    pub use crate::nav::{ConfirmationView, Destination, Navigator};
}
