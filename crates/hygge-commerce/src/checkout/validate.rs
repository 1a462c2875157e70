//! Per-step field validation.
//!
//! Validation failures are data, never errors: each failing field records
//! the first rule it broke, keyed by field, and the presentation renders
//! the message inline.

use crate::checkout::draft::CheckoutDraft;
use crate::checkout::step::CheckoutStep;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Editable checkout form fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Apartment,
    City,
    State,
    ZipCode,
    Country,
    ShippingMethod,
    CardNumber,
    CardName,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Apartment => "apartment",
            Field::City => "city",
            Field::State => "state",
            Field::ZipCode => "zip_code",
            Field::Country => "country",
            Field::ShippingMethod => "shipping_method",
            Field::CardNumber => "card_number",
            Field::CardName => "card_name",
            Field::ExpiryDate => "expiry_date",
            Field::Cvv => "cvv",
        }
    }
}

/// Inline validation errors, keyed by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the error for one field (on user edit).
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Clear all errors.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// The fields validated when advancing from (or submitting on) a step.
///
/// Card detail fields only apply when the draft pays by card.
pub fn step_fields(step: CheckoutStep, draft: &CheckoutDraft) -> Vec<Field> {
    match step {
        CheckoutStep::Address => vec![
            Field::FirstName,
            Field::LastName,
            Field::Address,
            Field::City,
            Field::State,
            Field::ZipCode,
            Field::Country,
        ],
        CheckoutStep::Shipping => vec![Field::ShippingMethod],
        CheckoutStep::Payment => {
            if draft.pays_by_card() {
                vec![
                    Field::CardNumber,
                    Field::CardName,
                    Field::ExpiryDate,
                    Field::Cvv,
                ]
            } else {
                Vec::new()
            }
        }
    }
}

/// Validate one field, returning the first failing rule's message.
pub fn validate_field(field: Field, draft: &CheckoutDraft) -> Option<&'static str> {
    match field {
        Field::FirstName => {
            required_min(&draft.first_name, 2, "First name is required",
                "First name must be at least 2 characters")
        }
        Field::LastName => {
            required_min(&draft.last_name, 2, "Last name is required",
                "Last name must be at least 2 characters")
        }
        Field::Address => {
            required_min(&draft.address, 5, "Address is required",
                "Address must be at least 5 characters")
        }
        Field::City => required_min(&draft.city, 2, "City is required",
            "City must be at least 2 characters"),
        Field::State => required_min(&draft.state, 2, "State is required",
            "State must be at least 2 characters"),
        Field::ZipCode => {
            if draft.zip_code.is_empty() {
                Some("ZIP code is required")
            } else if !is_exact_digits(&draft.zip_code, 4) {
                Some("ZIP code must be exactly 4 digits")
            } else {
                None
            }
        }
        Field::Country => {
            if draft.country.is_empty() {
                Some("Country is required")
            } else {
                None
            }
        }
        Field::ShippingMethod => {
            if draft.shipping_method.is_none() {
                Some("Shipping method is required")
            } else {
                None
            }
        }
        Field::CardNumber => {
            if draft.card_number.is_empty() {
                Some("Card number is required")
            } else if !is_exact_digits(&draft.card_number, 16) {
                Some("Card number must be 16 digits")
            } else {
                None
            }
        }
        Field::CardName => required_min(&draft.card_name, 3, "Name on card is required",
            "Name on card must be at least 3 characters"),
        Field::ExpiryDate => {
            if draft.expiry_date.is_empty() {
                Some("Expiry date is required")
            } else if !is_valid_expiry(&draft.expiry_date) {
                Some("Expiry date must be in MM/YY format")
            } else {
                None
            }
        }
        Field::Cvv => {
            if draft.cvv.is_empty() {
                Some("CVV is required")
            } else if !(3..=4).contains(&draft.cvv.len()) || !is_all_digits(&draft.cvv) {
                Some("CVV must be 3 or 4 digits")
            } else {
                None
            }
        }
        // Optional fields never fail validation.
        Field::Email | Field::Phone | Field::Apartment => None,
    }
}

/// Validate the given fields, collecting the first failing rule per field.
pub fn validate_fields(fields: &[Field], draft: &CheckoutDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for &field in fields {
        if let Some(message) = validate_field(field, draft) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate the fields belonging to one step.
pub fn validate_step(step: CheckoutStep, draft: &CheckoutDraft) -> FieldErrors {
    validate_fields(&step_fields(step, draft), draft)
}

/// Validate the entire draft against the full rule set.
pub fn validate_all(draft: &CheckoutDraft) -> FieldErrors {
    let mut fields = Vec::new();
    for step in [
        CheckoutStep::Address,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
    ] {
        fields.extend(step_fields(step, draft));
    }
    validate_fields(&fields, draft)
}

fn required_min(
    value: &str,
    min_chars: usize,
    required_msg: &'static str,
    min_msg: &'static str,
) -> Option<&'static str> {
    if value.is_empty() {
        Some(required_msg)
    } else if value.chars().count() < min_chars {
        Some(min_msg)
    } else {
        None
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && is_all_digits(value)
}

/// MM/YY with month 01-12.
fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    if !is_exact_digits(month, 2) || !is_exact_digits(year, 2) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(m) if (1..=12).contains(&m))
}
