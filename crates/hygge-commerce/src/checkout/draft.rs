//! The in-progress checkout form state.

use crate::checkout::totals::ShippingMethod;
use crate::checkout::validate::Field;
use serde::{Deserialize, Serialize};

/// Fixed country-code prefix on the phone field; cannot be removed.
pub const PHONE_PREFIX: &str = "+45";

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit card; card detail fields apply.
    Card,
    /// PayPal; no card details collected.
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

/// Ephemeral checkout form state, scoped to one checkout attempt.
///
/// Free-text fields are shaped on write the same way the form inputs shape
/// them: numeric fields keep digits only and clamp to their maximum length,
/// the expiry field slots in its slash, and the phone field keeps its fixed
/// country prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub save_contact: bool,
    pub shipping_method: Option<ShippingMethod>,
    pub payment_method: Option<PaymentMethod>,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl Default for CheckoutDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: PHONE_PREFIX.to_string(),
            address: String::new(),
            apartment: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: String::new(),
            save_contact: false,
            shipping_method: Some(ShippingMethod::Standard),
            payment_method: None,
            card_number: String::new(),
            card_name: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
        }
    }
}

impl CheckoutDraft {
    /// Write a text field, applying that field's input shaping.
    pub fn apply(&mut self, field: Field, value: &str) {
        match field {
            Field::FirstName => self.first_name = value.to_string(),
            Field::LastName => self.last_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = shape_phone(value),
            Field::Address => self.address = value.to_string(),
            Field::Apartment => self.apartment = value.to_string(),
            Field::City => self.city = value.to_string(),
            Field::State => self.state = value.to_string(),
            Field::ZipCode => self.zip_code = digits(value, 4),
            Field::Country => self.country = value.to_string(),
            Field::ShippingMethod => self.shipping_method = ShippingMethod::from_str(value),
            Field::CardNumber => self.card_number = digits(value, 16),
            Field::CardName => self.card_name = value.to_string(),
            Field::ExpiryDate => self.expiry_date = shape_expiry(value),
            Field::Cvv => self.cvv = digits(value, 4),
        }
    }

    /// Whether card detail fields apply to this draft.
    ///
    /// Card details are collected for the card method and while no method
    /// has been chosen yet; PayPal skips them.
    pub fn pays_by_card(&self) -> bool {
        !matches!(self.payment_method, Some(PaymentMethod::Paypal))
    }

    /// Customer full name for the order record.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Keep only digits, clamped to `max` characters.
fn digits(value: &str, max: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Shape an expiry input into MM/YY as the user types.
fn shape_expiry(value: &str) -> String {
    let d = digits(value, 4);
    if d.len() >= 2 {
        format!("{}/{}", &d[..2], &d[2..])
    } else {
        d
    }
}

/// Keep the fixed country prefix and at most 8 trailing digits.
fn shape_phone(value: &str) -> String {
    let rest = value.strip_prefix(PHONE_PREFIX).unwrap_or("");
    format!("{}{}", PHONE_PREFIX, digits(rest, 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = CheckoutDraft::default();
        assert_eq!(draft.phone, "+45");
        assert_eq!(draft.shipping_method, Some(ShippingMethod::Standard));
        assert_eq!(draft.payment_method, None);
        assert!(draft.pays_by_card());
    }

    #[test]
    fn test_card_number_shaping() {
        let mut draft = CheckoutDraft::default();
        draft.apply(Field::CardNumber, "1234-5678 9012 3456 789");
        assert_eq!(draft.card_number, "1234567890123456");
    }

    #[test]
    fn test_expiry_shaping() {
        let mut draft = CheckoutDraft::default();
        draft.apply(Field::ExpiryDate, "1");
        assert_eq!(draft.expiry_date, "1");
        draft.apply(Field::ExpiryDate, "12");
        assert_eq!(draft.expiry_date, "12/");
        draft.apply(Field::ExpiryDate, "1226");
        assert_eq!(draft.expiry_date, "12/26");
    }

    #[test]
    fn test_zip_shaping() {
        let mut draft = CheckoutDraft::default();
        draft.apply(Field::ZipCode, "12345abc");
        assert_eq!(draft.zip_code, "1234");
    }

    #[test]
    fn test_phone_keeps_prefix() {
        let mut draft = CheckoutDraft::default();
        draft.apply(Field::Phone, "+4512345678");
        assert_eq!(draft.phone, "+4512345678");

        // Attempting to erase the prefix resets to it.
        draft.apply(Field::Phone, "12345678");
        assert_eq!(draft.phone, "+45");

        draft.apply(Field::Phone, "+45 12 34 56 78 99");
        assert_eq!(draft.phone, "+4512345678");
    }

    #[test]
    fn test_paypal_skips_card_details() {
        let mut draft = CheckoutDraft::default();
        draft.payment_method = Some(PaymentMethod::Paypal);
        assert!(!draft.pays_by_card());
    }
}
