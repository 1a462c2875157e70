//! Shipping methods and order total computation.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Sales tax rate applied to the subtotal, in percent.
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// Available shipping methods, each with a fixed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Overnight,
}

impl ShippingMethod {
    /// All methods, in display order.
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::Overnight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Overnight => "overnight",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
            ShippingMethod::Overnight => "Overnight Shipping",
        }
    }

    /// Delivery time estimate shown next to the option.
    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "5-7 business days",
            ShippingMethod::Express => "2-3 business days",
            ShippingMethod::Overnight => "Next business day",
        }
    }

    /// Fixed price for this method.
    pub fn price(&self, currency: Currency) -> Money {
        let cents = match self {
            ShippingMethod::Standard => 1000,
            ShippingMethod::Express => 2500,
            ShippingMethod::Overnight => 4500,
        };
        Money::new(cents, currency)
    }

    /// Parse a method code string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ShippingMethod::Standard),
            "express" => Some(ShippingMethod::Express),
            "overnight" => Some(ShippingMethod::Overnight),
            _ => None,
        }
    }
}

/// Order total breakdown.
///
/// Pure function of the current cart subtotal and the selected shipping
/// method; recomputed on every read rather than stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CheckoutTotals {
    /// Cart subtotal.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount (8% of subtotal).
    pub tax: Money,
    /// Grand total (subtotal + shipping + tax).
    pub total: Money,
}

impl CheckoutTotals {
    /// Compute totals from a subtotal and an optionally-selected method.
    ///
    /// An unset method is priced as standard shipping.
    pub fn compute(subtotal: Money, method: Option<ShippingMethod>) -> Self {
        let shipping = method
            .unwrap_or(ShippingMethod::Standard)
            .price(subtotal.currency);
        let tax = subtotal.percentage(TAX_RATE_PERCENT);
        let total = subtotal.add(&shipping).add(&tax);
        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_prices() {
        let c = Currency::USD;
        assert_eq!(ShippingMethod::Standard.price(c).amount_cents, 1000);
        assert_eq!(ShippingMethod::Express.price(c).amount_cents, 2500);
        assert_eq!(ShippingMethod::Overnight.price(c).amount_cents, 4500);
    }

    #[test]
    fn test_shipping_from_str() {
        assert_eq!(
            ShippingMethod::from_str("express"),
            Some(ShippingMethod::Express)
        );
        assert_eq!(ShippingMethod::from_str("drone"), None);
    }

    #[test]
    fn test_totals_standard_shipping() {
        // Subtotal $200.00: shipping $10, tax $16.00, total $226.00.
        let totals = CheckoutTotals::compute(
            Money::new(20000, Currency::USD),
            Some(ShippingMethod::Standard),
        );
        assert_eq!(totals.shipping.amount_cents, 1000);
        assert_eq!(totals.tax.amount_cents, 1600);
        assert_eq!(totals.total.amount_cents, 22600);
    }

    #[test]
    fn test_totals_default_to_standard_when_unset() {
        let totals = CheckoutTotals::compute(Money::new(20000, Currency::USD), None);
        assert_eq!(totals.shipping.amount_cents, 1000);
    }

    #[test]
    fn test_totals_empty_cart() {
        let totals = CheckoutTotals::compute(Money::zero(Currency::USD), None);
        assert_eq!(totals.subtotal.amount_cents, 0);
        assert_eq!(totals.tax.amount_cents, 0);
        assert_eq!(totals.total.amount_cents, 1000);
    }
}
