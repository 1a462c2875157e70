//! Checkout wizard state machine.

use crate::cart::CartHandle;
use crate::checkout::draft::{CheckoutDraft, PaymentMethod};
use crate::checkout::order::OrderSnapshot;
use crate::checkout::step::CheckoutStep;
use crate::checkout::totals::{CheckoutTotals, ShippingMethod};
use crate::checkout::validate::{self, Field, FieldErrors};
use crate::error::CommerceError;
use crate::nav::{Destination, Navigator};
use std::time::Duration;

/// Result of the empty-cart guard, re-evaluated whenever the workflow is
/// entered or asked to progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutGate {
    /// Cart has items; checkout may proceed.
    Open,
    /// Cart is empty; the only affordance is leaving the flow.
    Blocked,
}

/// The three-step checkout wizard over a `CheckoutDraft`.
///
/// Forward progress is gated on per-step validation; going back is
/// unconditional. Successful submission finalizes an `OrderSnapshot`,
/// empties the cart, and hands control to the navigation boundary.
#[derive(Debug)]
pub struct CheckoutFlow {
    cart: CartHandle,
    step: CheckoutStep,
    draft: CheckoutDraft,
    errors: FieldErrors,
    coupon_code: String,
    applied_coupon: Option<String>,
    submitting: bool,
    submit_delay: Duration,
}

impl CheckoutFlow {
    /// Default simulated payment-processing latency.
    pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

    /// Enter the checkout workflow over the given cart.
    pub fn new(cart: CartHandle) -> Self {
        Self {
            cart,
            step: CheckoutStep::Address,
            draft: CheckoutDraft::default(),
            errors: FieldErrors::default(),
            coupon_code: String::new(),
            applied_coupon: None,
            submitting: false,
            submit_delay: Self::DEFAULT_SUBMIT_DELAY,
        }
    }

    /// Override the simulated submission latency.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    /// Re-evaluate the empty-cart guard.
    pub fn gate(&self) -> CheckoutGate {
        if self.cart.is_empty() {
            CheckoutGate::Blocked
        } else {
            CheckoutGate::Open
        }
    }

    /// Leave the flow and return to browsing (the blocked state's only
    /// affordance).
    pub fn leave(&self, nav: &mut dyn Navigator) {
        nav.navigate(Destination::Shop, None);
    }

    /// The current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The current draft state.
    pub fn draft(&self) -> &CheckoutDraft {
        &self.draft
    }

    /// Current inline field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a submission is in flight (submit must be disabled).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit a text field; clears that field's error as the user types.
    pub fn edit(&mut self, field: Field, value: &str) {
        self.draft.apply(field, value);
        self.errors.clear_field(field);
    }

    /// Toggle the save-contact checkbox.
    pub fn set_save_contact(&mut self, save: bool) {
        self.draft.save_contact = save;
    }

    /// Select a shipping method.
    pub fn select_shipping(&mut self, method: ShippingMethod) {
        self.draft.shipping_method = Some(method);
        self.errors.clear_field(Field::ShippingMethod);
    }

    /// Select a payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.draft.payment_method = Some(method);
    }

    /// The coupon input, normalized to uppercase as it is typed.
    pub fn set_coupon_code(&mut self, code: &str) {
        self.coupon_code = code.to_uppercase();
    }

    pub fn coupon_code(&self) -> &str {
        &self.coupon_code
    }

    /// Apply the current coupon code.
    ///
    /// Any non-blank code is accepted and recorded; totals are not
    /// affected (no discount policy is defined for the demo).
    pub fn apply_coupon(&mut self) -> bool {
        if self.coupon_code.trim().is_empty() {
            return false;
        }
        self.applied_coupon = Some(self.coupon_code.clone());
        true
    }

    /// The last successfully applied coupon code.
    pub fn applied_coupon(&self) -> Option<&str> {
        self.applied_coupon.as_deref()
    }

    /// Current order totals, recomputed from the live cart on every read.
    pub fn totals(&self) -> CheckoutTotals {
        CheckoutTotals::compute(self.cart.total(), self.draft.shipping_method)
    }

    /// Validated forward transition.
    ///
    /// On validation failure the step does not change, the first failing
    /// rule per field is recorded, and `ValidationFailed` is returned.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        if self.gate() == CheckoutGate::Blocked {
            return Err(CommerceError::EmptyCart);
        }
        let Some(next) = self.step.next() else {
            return Err(CommerceError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            });
        };

        let errors = validate::validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            let fields = errors.len();
            self.errors = errors;
            return Err(CommerceError::ValidationFailed { fields });
        }

        self.errors.clear();
        self.step = next;
        tracing::debug!(step = self.step.as_str(), "checkout advanced");
        Ok(next)
    }

    /// Unconditional backward transition; clears field errors. No-op on
    /// the first step.
    pub fn retreat(&mut self) -> CheckoutStep {
        self.errors.clear();
        if let Some(prev) = self.step.back() {
            self.step = prev;
            tracing::debug!(step = self.step.as_str(), "checkout went back");
        }
        self.step
    }

    /// Finalize the order. Only reachable from the payment step.
    ///
    /// Re-validates the payment step and then the entire draft before any
    /// side effect. On success: waits out the simulated processing delay,
    /// builds the order snapshot, empties the cart, and requests
    /// navigation to the confirmation destination with the snapshot as
    /// payload.
    pub async fn submit(&mut self, nav: &mut dyn Navigator) -> Result<(), CommerceError> {
        if self.submitting {
            return Err(CommerceError::SubmissionInProgress);
        }
        if self.step != CheckoutStep::Payment {
            return Err(CommerceError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: "submit".to_string(),
            });
        }
        if self.gate() == CheckoutGate::Blocked {
            return Err(CommerceError::EmptyCart);
        }

        let step_errors = validate::validate_step(self.step, &self.draft);
        if !step_errors.is_empty() {
            let fields = step_errors.len();
            self.errors = step_errors;
            return Err(CommerceError::ValidationFailed { fields });
        }

        self.submitting = true;

        // Defensive double-check of the whole draft before any side effect.
        let all_errors = validate::validate_all(&self.draft);
        if !all_errors.is_empty() {
            let fields = all_errors.len();
            self.errors = all_errors;
            self.submitting = false;
            return Err(CommerceError::ValidationFailed { fields });
        }

        // Simulated payment processing; always resolves to success.
        tokio::time::sleep(self.submit_delay).await;

        let totals = self.totals();
        let order = OrderSnapshot::build(&self.draft, totals, self.cart.items());
        self.cart.clear();
        self.submitting = false;

        tracing::info!(
            order_number = %order.order_number,
            total = %order.totals.total,
            "order placed"
        );
        nav.navigate(Destination::Confirmation, Some(order));
        Ok(())
    }
}
