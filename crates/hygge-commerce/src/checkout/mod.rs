//! Checkout module.
//!
//! A three-step wizard (Address -> Shipping -> Payment) over an ephemeral
//! draft, with per-step validation gating, order total computation, and
//! finalization into an order snapshot.

mod draft;
mod flow;
mod order;
mod step;
mod totals;
mod validate;

pub use draft::{CheckoutDraft, PaymentMethod, PHONE_PREFIX};
pub use flow::{CheckoutFlow, CheckoutGate};
pub use order::{
    generate_order_number, OrderSnapshot, OrderStatus, PaymentStatus, ShippingAddress,
};
pub use step::CheckoutStep;
pub use totals::{CheckoutTotals, ShippingMethod, TAX_RATE_PERCENT};
pub use validate::{
    step_fields, validate_all, validate_field, validate_step, Field, FieldErrors,
};
