use async_trait::async_trait;
use chrono::NaiveDate;
use url::Url;

use crate::domain::checkout::{
    CheckoutOutcome, CheckoutRequest, PaymentOrder, ReservationRecord, ReservationRequest,
};
use crate::domain::dates::DateBounds;
use crate::domain::errors::BackendError;
use crate::domain::offers::{Availability, RoomQuote, Selection};
use crate::domain::stay::StayQuery;

// Port for the booking backend used by the search and checkout flows.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn check_availability(&self, query: &StayQuery) -> Result<Availability, BackendError>;
    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationRecord, BackendError>;
}

// Port for the payment service that opens provider orders.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn create_order(
        &self,
        reservation: &ReservationRecord,
    ) -> Result<PaymentOrder, BackendError>;
}

// Port for the third-party checkout surface. Opening it cannot fail;
// the gateway resolves once the guest either pays or walks away.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn collect(&self, request: &CheckoutRequest) -> CheckoutOutcome;
}

// Port for everything the widget presents. Adapters decide how each
// signal reaches the page.
pub trait BookingView: Send + Sync {
    // Busy state of the search submit control; the adapter owns labels.
    fn set_search_busy(&self, busy: bool);
    // Busy state of the guest details submit control.
    fn set_reserve_busy(&self, busy: bool);
    fn show_validation_error(&self, message: &str);
    // Wipes result cards, notices, and the guest form before a re-render.
    fn clear_results(&self);
    fn show_offers(&self, query: &StayQuery, quotes: &[RoomQuote]);
    // Brings the freshly rendered results into view.
    fn focus_results(&self);
    // No-rooms and connectivity notices share the results notice region.
    fn show_notice(&self, message: &str);
    // Step failures from the reservation and order stages.
    fn show_error(&self, message: &str);
    // Hides the results and reveals the guest form for one selection.
    fn show_guest_form(&self, selection: &Selection);
    // New picker bounds plus the departure value that survived them.
    fn apply_date_bounds(&self, bounds: DateBounds, departure: Option<NaiveDate>);
    // Terminal navigation to the server-side verification endpoint.
    fn redirect(&self, target: &Url);
}

// Port for the local calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
