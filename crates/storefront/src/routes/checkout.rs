//! Checkout flow route handlers.
//!
//! The checkout state machine from `ecofleet-core` lives in the session for
//! the duration of the flow: `GET /checkout` renders whatever state the
//! machine is in, `POST /checkout/place` drives the validation gate and the
//! fixed-duration order-processing placeholder. Navigating away while the
//! placeholder runs simply abandons the request; no compensating action is
//! taken.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ecofleet_core::{Checkout, CheckoutState, PaymentMethod};

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{CartView, load_cart, save_cart};

/// Session key holding the serialized checkout machine.
const CHECKOUT_KEY: &str = "ecofleet.checkout.v1";

/// Fixed order-processing placeholder; not a network operation.
const ORDER_PROCESSING_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the checkout machine from the session.
///
/// An absent or unreadable snapshot yields a fresh machine in `Editing`.
async fn load_checkout(session: &Session) -> Checkout {
    session
        .get::<Checkout>(CHECKOUT_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the checkout machine in the session.
async fn save_checkout(session: &Session, checkout: &Checkout) -> Result<()> {
    session.insert(CHECKOUT_KEY, checkout).await?;
    Ok(())
}

/// Checkout form data.
///
/// Checkboxes submit a value only when ticked, hence the `Option`s.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub payment_method: Option<String>,
    #[serde(default)]
    pub delivery_address: String,
    pub agreement: Option<String>,
    pub redeem_credits: Option<String>,
}

/// One payment method card in the form.
#[derive(Clone)]
pub struct PaymentOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutFormTemplate {
    pub cart: CartView,
    pub payment_options: Vec<PaymentOptionView>,
    pub delivery_address: String,
    pub agreement_checked: bool,
    pub redeem_credits: bool,
    pub error_message: Option<String>,
}

/// Order-placed confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct CheckoutConfirmationTemplate {}

/// Display the checkout page for the machine's current state.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let checkout = load_checkout(&session).await;

    if checkout.state() == CheckoutState::Completed {
        return Ok(CheckoutConfirmationTemplate {}.into_response());
    }

    let cart = load_cart(&session).await;
    let selection = checkout.selection();
    let error_message = if checkout.error_visible() {
        selection.validate().err().map(|e| e.to_string())
    } else {
        None
    };
    let payment_options = PaymentMethod::ALL
        .iter()
        .map(|method| PaymentOptionView {
            value: method.as_str().to_string(),
            label: method.label().to_string(),
            selected: selection.payment_method == Some(*method),
        })
        .collect();

    Ok(CheckoutFormTemplate {
        cart: CartView::from(&cart),
        payment_options,
        delivery_address: selection.delivery_address.clone(),
        agreement_checked: selection.agreement_checked,
        redeem_credits: selection.redeem_eco_credits,
        error_message,
    }
    .into_response())
}

/// Place the order.
///
/// Applies the form to the machine's selection and submits. A validation
/// failure stores the error-flagged machine and redirects back to the form;
/// a successful submission waits out the processing placeholder, completes
/// the machine, and empties the cart.
#[instrument(skip(session, form))]
pub async fn place(session: Session, Form(form): Form<CheckoutForm>) -> Result<Redirect> {
    let mut checkout = load_checkout(&session).await;

    if checkout.state() == CheckoutState::Editing {
        let selection = checkout.selection_mut();
        selection.payment_method = form
            .payment_method
            .as_deref()
            .and_then(|value| value.parse().ok());
        selection.delivery_address = form.delivery_address;
        selection.agreement_checked = form.agreement.is_some();
        selection.redeem_eco_credits = form.redeem_credits.is_some();

        match checkout.submit() {
            Err(err) => {
                tracing::debug!("checkout validation failed: {err}");
                save_checkout(&session, &checkout).await?;
            }
            Ok(()) => {
                save_checkout(&session, &checkout).await?;

                tokio::time::sleep(ORDER_PROCESSING_DELAY).await;

                checkout.complete();
                let cart = load_cart(&session).await.clear();
                save_cart(&session, &cart).await?;
                save_checkout(&session, &checkout).await?;
            }
        }
    }

    Ok(Redirect::to("/checkout"))
}

/// Return to the store after a completed order, resetting the flow.
#[instrument(skip(session))]
pub async fn again(session: Session) -> Result<Redirect> {
    let mut checkout = load_checkout(&session).await;
    checkout.reset_to_editing();
    save_checkout(&session, &checkout).await?;
    Ok(Redirect::to("/store"))
}
