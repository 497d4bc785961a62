use crate::domain::guest::GuestDetails;
use crate::domain::offers::Selection;

// Everything the booking API needs to create a pending reservation.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationRequest {
    pub selection: Selection,
    pub guest: GuestDetails,
}

// A pending reservation created server-side. `amount` is the
// authoritative charge for the payment order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReservationRecord {
    pub booking_id: i64,
    pub amount: f64,
}

// A payment order opened with the provider for one reservation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentOrder {
    pub order_id: String,
    pub provider_key: String,
}

// Order description handed to the checkout gateway. Amounts are in
// minor units, as the provider requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub provider_key: String,
    pub order_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub merchant_name: String,
    pub description: String,
    pub prefill_name: String,
    pub prefill_email: String,
    pub prefill_contact: String,
    pub theme_color: String,
}

// Provider-issued identifiers returned by a completed checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

// The two ways a checkout can end. Dismissal is a guest decision, not
// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed(PaymentConfirmation),
    Dismissed,
}
