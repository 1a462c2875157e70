//! Checkout step enumeration.

use serde::{Deserialize, Serialize};

/// Steps in the checkout wizard, in order.
///
/// A tagged enum rather than a bare index keeps "step 4" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Shipping address and contact details.
    #[default]
    Address,
    /// Shipping method selection.
    Shipping,
    /// Payment details and order submission.
    Payment,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "address",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "Address",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Address => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => None,
        }
    }

    /// The preceding step, if any.
    pub fn back(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Address => None,
            CheckoutStep::Shipping => Some(CheckoutStep::Address),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert_eq!(CheckoutStep::Address.next(), Some(CheckoutStep::Shipping));
        assert_eq!(CheckoutStep::Shipping.next(), Some(CheckoutStep::Payment));
        assert_eq!(CheckoutStep::Payment.next(), None);

        assert_eq!(CheckoutStep::Address.back(), None);
        assert_eq!(CheckoutStep::Payment.back(), Some(CheckoutStep::Shipping));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckoutStep::Address.number(), 1);
        assert_eq!(CheckoutStep::Shipping.number(), 2);
        assert_eq!(CheckoutStep::Payment.number(), 3);
    }
}
