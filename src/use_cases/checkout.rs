use tracing::{info, warn};
use url::Url;

use crate::domain::checkout::{
    CheckoutOutcome, CheckoutRequest, PaymentConfirmation, PaymentOrder, ReservationRecord,
    ReservationRequest,
};
use crate::domain::errors::BackendError;
use crate::domain::money;
use crate::domain::ports::{BookingApi, CheckoutGateway, PaymentApi};
use crate::use_cases::CONNECTIVITY_MESSAGE;

// Stage fallbacks, used when the backend rejects without a message.
pub const RESERVATION_FALLBACK: &str = "Failed to create reservation.";
pub const ORDER_FALLBACK: &str = "Failed to create Razorpay Order.";

// Checkout stage in which a failure occurred. A failed reservation
// never reaches the order stage, a failed order never opens checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutStage {
    Reserving,
    CreatingOrder,
}

// Terminal result of one checkout attempt. `Paid` carries the redirect
// to the server-side verification endpoint; `Dismissed` leaves the
// selection ready for retry. A reservation that failed at the order
// stage stays pending server-side; this flow does not compensate.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutResult {
    Paid { redirect: Url },
    Dismissed,
    Failed { stage: CheckoutStage, message: String },
}

// Branding and prefill handed to the gateway, fixed per deployment.
#[derive(Clone, Debug)]
pub struct CheckoutBranding {
    pub currency: String,
    pub merchant_name: String,
    pub description: String,
    pub prefill_contact: String,
    pub theme_color: String,
}

// Reserve, create the payment order, collect payment. Each stage
// recovers on its own; nothing retries automatically.
pub struct CheckoutFlow<B, P, G> {
    pub bookings: B,
    pub payments: P,
    pub gateway: G,
    pub success_url: Url,
    pub branding: CheckoutBranding,
}

impl<B, P, G> CheckoutFlow<B, P, G>
where
    B: BookingApi,
    P: PaymentApi,
    G: CheckoutGateway,
{
    pub async fn execute(&self, request: &ReservationRequest) -> CheckoutResult {
        let reservation = match self.bookings.create_reservation(request).await {
            Ok(reservation) => reservation,
            Err(err) => return stage_failure(CheckoutStage::Reserving, err, RESERVATION_FALLBACK),
        };
        info!(
            booking_id = reservation.booking_id,
            amount = reservation.amount,
            "reservation created"
        );

        let order = match self.payments.create_order(&reservation).await {
            Ok(order) => order,
            Err(err) => return stage_failure(CheckoutStage::CreatingOrder, err, ORDER_FALLBACK),
        };
        info!(order_id = %order.order_id, "payment order created");

        let checkout = self.checkout_request(request, &reservation, &order);
        match self.gateway.collect(&checkout).await {
            CheckoutOutcome::Completed(confirmation) => {
                info!(
                    order_id = %confirmation.order_id,
                    payment_id = %confirmation.payment_id,
                    "payment collected"
                );
                CheckoutResult::Paid {
                    redirect: self.success_redirect(&confirmation),
                }
            }
            CheckoutOutcome::Dismissed => {
                info!(order_id = %order.order_id, "checkout dismissed by guest");
                CheckoutResult::Dismissed
            }
        }
    }

    fn checkout_request(
        &self,
        request: &ReservationRequest,
        reservation: &ReservationRecord,
        order: &PaymentOrder,
    ) -> CheckoutRequest {
        CheckoutRequest {
            provider_key: order.provider_key.clone(),
            order_id: order.order_id.clone(),
            amount_minor: money::to_minor_units(reservation.amount),
            currency: self.branding.currency.clone(),
            merchant_name: self.branding.merchant_name.clone(),
            description: self.branding.description.clone(),
            prefill_name: request.guest.name.clone(),
            prefill_email: request.guest.email.clone(),
            prefill_contact: self.branding.prefill_contact.clone(),
            theme_color: self.branding.theme_color.clone(),
        }
    }

    fn success_redirect(&self, confirmation: &PaymentConfirmation) -> Url {
        let mut target = self.success_url.clone();
        target
            .query_pairs_mut()
            .append_pair("razorpay_order_id", &confirmation.order_id)
            .append_pair("razorpay_payment_id", &confirmation.payment_id)
            .append_pair("razorpay_signature", &confirmation.signature);
        target
    }
}

fn stage_failure(stage: CheckoutStage, err: BackendError, fallback: &str) -> CheckoutResult {
    let message = match err {
        BackendError::Unreachable => CONNECTIVITY_MESSAGE.to_string(),
        BackendError::Rejected { message } => message.unwrap_or_else(|| fallback.to_string()),
    };
    warn!(?stage, %message, "checkout stage failed");
    CheckoutResult::Failed { stage, message }
}
