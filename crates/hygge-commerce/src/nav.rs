//! Navigation boundary.
//!
//! The checkout flow requests transitions to named destinations and may
//! attach an order snapshot as payload; carrying that payload to whatever
//! renders the destination is the boundary's job, not the core's.

use crate::checkout::OrderSnapshot;
use serde::{Deserialize, Serialize};

/// Named screens the core can request a transition to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Product browsing.
    Shop,
    /// The checkout wizard.
    Checkout,
    /// Order confirmation.
    Confirmation,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Shop => "shop",
            Destination::Checkout => "checkout",
            Destination::Confirmation => "confirmation",
        }
    }
}

/// Routing facility supplied by the host application.
pub trait Navigator {
    /// Request a transition, optionally carrying an order snapshot.
    fn navigate(&mut self, destination: Destination, payload: Option<OrderSnapshot>);
}

/// What the confirmation destination renders.
///
/// Entering it without a payload presents an explicit empty state rather
/// than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConfirmationView {
    /// A placed order to display.
    Order(OrderSnapshot),
    /// Entered without a payload; nothing to show.
    NothingToShow,
}

impl ConfirmationView {
    pub fn from_payload(payload: Option<OrderSnapshot>) -> Self {
        match payload {
            Some(order) => ConfirmationView::Order(order),
            None => ConfirmationView::NothingToShow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_without_payload() {
        assert_eq!(
            ConfirmationView::from_payload(None),
            ConfirmationView::NothingToShow
        );
    }

    #[test]
    fn test_destination_names() {
        assert_eq!(Destination::Confirmation.as_str(), "confirmation");
    }
}
