//! Checkout flow state machine.
//!
//! States progress `Editing -> Submitting -> Completed`. There is no failed
//! terminal state: a rejected validation check stays in `Editing` with the
//! error flag set. The `Submitting -> Completed` step is driven externally
//! by the fixed-duration order-processing placeholder; an in-flight
//! submission abandoned by navigation is simply discarded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    EcoCredits,
}

impl PaymentMethod {
    /// All offered methods, in display order.
    pub const ALL: [Self; 2] = [Self::Card, Self::EcoCredits];

    /// The form/wire value for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::EcoCredits => "eco",
        }
    }

    /// The label shown to the shopper.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::EcoCredits => "EcoCredits",
        }
    }
}

/// Error parsing a [`PaymentMethod`] from a form value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct PaymentMethodParseError(pub String);

impl FromStr for PaymentMethod {
    type Err = PaymentMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "eco" => Ok(Self::EcoCredits),
            other => Err(PaymentMethodParseError(other.to_string())),
        }
    }
}

/// The shopper's current checkout form selections.
///
/// Transient: discarded on successful order placement or navigation away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSelection {
    /// Chosen payment method, unset until the shopper picks one.
    pub payment_method: Option<PaymentMethod>,
    /// Free-text delivery address.
    pub delivery_address: String,
    /// Whether the green-delivery agreement box is ticked.
    pub agreement_checked: bool,
    /// Whether to redeem the EcoCredit balance against this order.
    pub redeem_eco_credits: bool,
}

impl CheckoutSelection {
    /// The validation gate applied before submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: missing agreement, then missing
    /// payment method.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.agreement_checked {
            return Err(ValidationError::AgreementRequired);
        }
        if self.payment_method.is_none() {
            return Err(ValidationError::PaymentMethodRequired);
        }
        Ok(())
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("please agree to our eco-friendly terms to continue")]
    AgreementRequired,
    #[error("please choose a payment method to continue")]
    PaymentMethodRequired,
}

/// Where the checkout flow currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutState {
    #[default]
    Editing,
    Submitting,
    Completed,
}

/// The checkout flow state holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    state: CheckoutState,
    selection: CheckoutSelection,
    error_visible: bool,
}

impl Checkout {
    /// A fresh checkout in `Editing` with default selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Current form selections.
    #[must_use]
    pub const fn selection(&self) -> &CheckoutSelection {
        &self.selection
    }

    /// Mutable access to the form selections; only meaningful in `Editing`.
    pub fn selection_mut(&mut self) -> &mut CheckoutSelection {
        &mut self.selection
    }

    /// Whether the inline validation message should be shown.
    #[must_use]
    pub const fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// Attempt to submit the order.
    ///
    /// Only meaningful in `Editing`; calls in other states do nothing and
    /// report success. On a validation failure the error flag is set and the
    /// state stays `Editing`; on success the flag clears and the state moves
    /// to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns the failed validation check so callers can surface it inline.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        if self.state != CheckoutState::Editing {
            return Ok(());
        }
        match self.selection.validate() {
            Ok(()) => {
                self.error_visible = false;
                self.state = CheckoutState::Submitting;
                Ok(())
            }
            Err(err) => {
                self.error_visible = true;
                Err(err)
            }
        }
    }

    /// Finish the order-processing placeholder: `Submitting -> Completed`.
    ///
    /// No-op in any other state.
    pub fn complete(&mut self) {
        if matches!(self.state, CheckoutState::Submitting) {
            self.state = CheckoutState::Completed;
        }
    }

    /// Return to `Editing` from `Completed`, clearing all selection fields.
    ///
    /// Used when the shopper chooses to shop again. No-op in other states.
    pub fn reset_to_editing(&mut self) {
        if self.state == CheckoutState::Completed {
            *self = Self::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_selection() -> CheckoutSelection {
        CheckoutSelection {
            payment_method: Some(PaymentMethod::Card),
            delivery_address: "123 Green Street, Bengaluru, India".to_string(),
            agreement_checked: true,
            redeem_eco_credits: false,
        }
    }

    #[test]
    fn test_submit_without_agreement_stays_editing_with_error() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = CheckoutSelection {
            agreement_checked: false,
            ..valid_selection()
        };

        let result = checkout.submit();
        assert_eq!(result, Err(ValidationError::AgreementRequired));
        assert_eq!(checkout.state(), CheckoutState::Editing);
        assert!(checkout.error_visible());
    }

    #[test]
    fn test_submit_without_payment_method_stays_editing_with_error() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = CheckoutSelection {
            payment_method: None,
            ..valid_selection()
        };

        let result = checkout.submit();
        assert_eq!(result, Err(ValidationError::PaymentMethodRequired));
        assert_eq!(checkout.state(), CheckoutState::Editing);
        assert!(checkout.error_visible());
    }

    #[test]
    fn test_valid_submit_runs_to_completed() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = valid_selection();

        assert_eq!(checkout.submit(), Ok(()));
        assert_eq!(checkout.state(), CheckoutState::Submitting);
        assert!(!checkout.error_visible());

        checkout.complete();
        assert_eq!(checkout.state(), CheckoutState::Completed);
        assert!(!checkout.error_visible());
    }

    #[test]
    fn test_error_flag_clears_on_successful_submit() {
        let mut checkout = Checkout::new();
        assert!(checkout.submit().is_err());
        assert!(checkout.error_visible());

        *checkout.selection_mut() = valid_selection();
        assert_eq!(checkout.submit(), Ok(()));
        assert!(!checkout.error_visible());
    }

    #[test]
    fn test_complete_is_noop_outside_submitting() {
        let mut checkout = Checkout::new();
        checkout.complete();
        assert_eq!(checkout.state(), CheckoutState::Editing);
    }

    #[test]
    fn test_reset_clears_fields_from_completed() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = valid_selection();
        checkout.submit().expect("valid selection");
        checkout.complete();

        checkout.reset_to_editing();
        assert_eq!(checkout, Checkout::new());
        assert_eq!(checkout.selection().delivery_address, "");
        assert_eq!(checkout.selection().payment_method, None);
    }

    #[test]
    fn test_reset_is_noop_outside_completed() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = valid_selection();
        checkout.reset_to_editing();
        assert_eq!(checkout.selection(), &valid_selection());
    }

    #[test]
    fn test_submit_is_noop_outside_editing() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = valid_selection();
        checkout.submit().expect("valid selection");

        // A duplicate submission while processing changes nothing.
        assert_eq!(checkout.submit(), Ok(()));
        assert_eq!(checkout.state(), CheckoutState::Submitting);
    }

    #[test]
    fn test_payment_method_form_values() {
        assert_eq!("card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("eco".parse::<PaymentMethod>(), Ok(PaymentMethod::EcoCredits));
        assert!("upi".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_machine_serde_roundtrip() {
        let mut checkout = Checkout::new();
        *checkout.selection_mut() = valid_selection();
        checkout.submit().expect("valid selection");

        let json = serde_json::to_string(&checkout).expect("serialize");
        let back: Checkout = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, checkout);
    }
}
