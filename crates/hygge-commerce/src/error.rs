//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Field-level validation failures are not errors: they are recorded as data
/// on the checkout flow (`FieldErrors`) and surfaced inline next to the field.
/// The variants here cover guard conditions and misuse of the flow itself.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout entered or advanced with an empty cart.
    #[error("Cart is empty: add items before proceeding to checkout")]
    EmptyCart,

    /// Step validation failed; per-field messages are recorded on the flow.
    #[error("Validation failed for {fields} field(s)")]
    ValidationFailed { fields: usize },

    /// Invalid checkout step transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Submission requested while a previous submission is still in flight.
    #[error("Submission already in progress")]
    SubmissionInProgress,
}
