//! Order snapshot types.

use crate::cart::CartLineItem;
use crate::checkout::draft::CheckoutDraft;
use crate::checkout::totals::CheckoutTotals;
use serde::{Deserialize, Serialize};

/// Order status recorded on a freshly placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// Payment status recorded on a freshly placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// Shipping address copied from the draft at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    pub address: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Copy the address fields out of a draft.
    pub fn from_draft(draft: &CheckoutDraft) -> Self {
        Self {
            address: draft.address.clone(),
            apartment: draft.apartment.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            zip_code: draft.zip_code.clone(),
            country: draft.country.clone(),
        }
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address.clone()];
        if !self.apartment.is_empty() {
            parts.push(self.apartment.clone());
        }
        parts.push(self.city.clone());
        parts.push(self.state.clone());
        parts.push(self.zip_code.clone());
        parts.push(self.country.clone());
        parts.join(", ")
    }
}

/// The immutable record produced at successful checkout submission.
///
/// Owned by whatever the navigation boundary does with it; the core does
/// not persist it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Short human-readable order number.
    pub order_number: String,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
    /// Customer full name.
    pub customer_name: String,
    /// Payment status; always `Paid` for the demo flow.
    pub payment_status: PaymentStatus,
    /// Order status; always `Processing` for the demo flow.
    pub order_status: OrderStatus,
    /// Total breakdown at submission time.
    pub totals: CheckoutTotals,
    /// Shipping address copy.
    pub shipping_address: ShippingAddress,
    /// Value copy of the cart items at submission time.
    pub items: Vec<CartLineItem>,
}

/// Generate a short order number from the current time.
///
/// "ORD" plus the last 8 digits of the millisecond timestamp. Monotonic
/// within a session but not collision-safe as a global identifier.
pub fn generate_order_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("ORD{:08}", ms % 100_000_000)
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl OrderSnapshot {
    /// Build the snapshot from the draft, the computed totals, and a value
    /// copy of the cart items.
    pub fn build(
        draft: &CheckoutDraft,
        totals: CheckoutTotals,
        items: Vec<CartLineItem>,
    ) -> Self {
        Self {
            order_number: generate_order_number(),
            placed_at: current_timestamp(),
            customer_name: draft.full_name(),
            payment_status: PaymentStatus::Paid,
            order_status: OrderStatus::Processing,
            totals,
            shipping_address: ShippingAddress::from_draft(draft),
            items,
        }
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number();
        assert!(number.starts_with("ORD"));
        assert_eq!(number.len(), 11);
        assert!(number[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(PaymentStatus::Paid.as_str(), "Paid");
        assert_eq!(OrderStatus::Processing.as_str(), "Processing");
    }

    #[test]
    fn test_address_one_line_skips_empty_apartment() {
        let addr = ShippingAddress {
            address: "123 Main Street".into(),
            apartment: String::new(),
            city: "Copenhagen".into(),
            state: "Hovedstaden".into(),
            zip_code: "2100".into(),
            country: "Denmark".into(),
        };
        assert_eq!(
            addr.one_line(),
            "123 Main Street, Copenhagen, Hovedstaden, 2100, Denmark"
        );
    }
}
