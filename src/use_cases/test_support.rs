use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use url::Url;

use crate::domain::checkout::{
    CheckoutOutcome, CheckoutRequest, PaymentConfirmation, PaymentOrder, ReservationRecord,
    ReservationRequest,
};
use crate::domain::dates::DateBounds;
use crate::domain::errors::BackendError;
use crate::domain::guest::GuestDetails;
use crate::domain::offers::{Availability, RoomOffer, RoomQuote, Selection};
use crate::domain::ports::{BookingApi, BookingView, CheckoutGateway, Clock, PaymentApi};
use crate::domain::stay::StayQuery;
use crate::use_cases::checkout::CheckoutBranding;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

// The stay used across use-case and controller tests: three nights.
pub(crate) fn december_stay() -> StayQuery {
    StayQuery {
        arrival: date(2025, 12, 1),
        departure: date(2025, 12, 4),
        guests: 2,
    }
}

pub(crate) fn deluxe_offer() -> RoomOffer {
    RoomOffer {
        room_id: 7,
        name: "Deluxe Suite".to_string(),
        price_per_night: 2000.0,
        available_count: 3,
    }
}

pub(crate) fn reservation_request() -> ReservationRequest {
    let query = december_stay();
    let quote = RoomQuote::price(deluxe_offer(), &query);
    ReservationRequest {
        selection: Selection::new(quote, query),
        guest: GuestDetails {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        },
    }
}

pub(crate) fn test_branding() -> CheckoutBranding {
    CheckoutBranding {
        currency: "INR".to_string(),
        merchant_name: "Resort Booking".to_string(),
        description: "Room Reservation Payment".to_string(),
        prefill_contact: "9999999999".to_string(),
        theme_color: "#6B7280".to_string(),
    }
}

// Shared fixed calendar date for deterministic bounds tests.
pub(crate) struct FixedClock(pub(crate) NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone)]
enum AvailabilityScript {
    Reply(Availability),
    Unreachable,
}

#[derive(Clone)]
enum ReserveScript {
    Accept(ReservationRecord),
    Reject(Option<String>),
    Unreachable,
}

// Booking API fake: scripted replies plus recorded requests.
#[derive(Clone)]
pub(crate) struct RecordingRooms {
    availability: AvailabilityScript,
    reserve: ReserveScript,
    availability_calls: Arc<Mutex<Vec<StayQuery>>>,
    reserve_calls: Arc<Mutex<Vec<ReservationRequest>>>,
}

impl RecordingRooms {
    fn with_availability(availability: AvailabilityScript) -> Self {
        Self {
            availability,
            reserve: ReserveScript::Accept(ReservationRecord {
                booking_id: 1,
                amount: 100.0,
            }),
            availability_calls: Arc::new(Mutex::new(Vec::new())),
            reserve_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn offering(rooms: Vec<(&str, i64, f64, u32)>) -> Self {
        let offers = rooms
            .into_iter()
            .map(|(name, room_id, price_per_night, available_count)| RoomOffer {
                room_id,
                name: name.to_string(),
                price_per_night,
                available_count,
            })
            .collect();
        Self::with_availability(AvailabilityScript::Reply(Availability::Available(offers)))
    }

    pub(crate) fn unavailable(message: Option<&str>) -> Self {
        Self::with_availability(AvailabilityScript::Reply(Availability::Unavailable {
            message: message.map(str::to_string),
        }))
    }

    pub(crate) fn unreachable() -> Self {
        Self::with_availability(AvailabilityScript::Unreachable)
    }

    pub(crate) fn with_reservation(mut self, booking_id: i64, amount: f64) -> Self {
        self.reserve = ReserveScript::Accept(ReservationRecord { booking_id, amount });
        self
    }

    pub(crate) fn with_reserve_rejection(mut self, message: Option<&str>) -> Self {
        self.reserve = ReserveScript::Reject(message.map(str::to_string));
        self
    }

    pub(crate) fn with_reserve_unreachable(mut self) -> Self {
        self.reserve = ReserveScript::Unreachable;
        self
    }

    pub(crate) fn availability_queries(&self) -> Vec<StayQuery> {
        self.availability_calls
            .lock()
            .expect("availability calls mutex poisoned")
            .clone()
    }

    pub(crate) fn reserve_requests(&self) -> Vec<ReservationRequest> {
        self.reserve_calls
            .lock()
            .expect("reserve calls mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl BookingApi for RecordingRooms {
    async fn check_availability(&self, query: &StayQuery) -> Result<Availability, BackendError> {
        self.availability_calls
            .lock()
            .expect("availability calls mutex poisoned")
            .push(*query);
        match &self.availability {
            AvailabilityScript::Reply(reply) => Ok(reply.clone()),
            AvailabilityScript::Unreachable => Err(BackendError::Unreachable),
        }
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationRecord, BackendError> {
        self.reserve_calls
            .lock()
            .expect("reserve calls mutex poisoned")
            .push(request.clone());
        match &self.reserve {
            ReserveScript::Accept(record) => Ok(*record),
            ReserveScript::Reject(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            ReserveScript::Unreachable => Err(BackendError::Unreachable),
        }
    }
}

#[derive(Clone)]
enum OrderScript {
    Issue(PaymentOrder),
    Reject(Option<String>),
    Unreachable,
}

// Payment API fake: scripted order replies plus recorded reservations.
#[derive(Clone)]
pub(crate) struct RecordingPayments {
    script: OrderScript,
    order_calls: Arc<Mutex<Vec<ReservationRecord>>>,
}

impl RecordingPayments {
    fn with_script(script: OrderScript) -> Self {
        Self {
            script,
            order_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn issuing(order_id: &str, provider_key: &str) -> Self {
        Self::with_script(OrderScript::Issue(PaymentOrder {
            order_id: order_id.to_string(),
            provider_key: provider_key.to_string(),
        }))
    }

    pub(crate) fn rejecting(message: Option<&str>) -> Self {
        Self::with_script(OrderScript::Reject(message.map(str::to_string)))
    }

    pub(crate) fn unreachable() -> Self {
        Self::with_script(OrderScript::Unreachable)
    }

    pub(crate) fn orders(&self) -> Vec<ReservationRecord> {
        self.order_calls
            .lock()
            .expect("order calls mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl PaymentApi for RecordingPayments {
    async fn create_order(
        &self,
        reservation: &ReservationRecord,
    ) -> Result<PaymentOrder, BackendError> {
        self.order_calls
            .lock()
            .expect("order calls mutex poisoned")
            .push(*reservation);
        match &self.script {
            OrderScript::Issue(order) => Ok(order.clone()),
            OrderScript::Reject(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            OrderScript::Unreachable => Err(BackendError::Unreachable),
        }
    }
}

#[derive(Clone)]
enum CheckoutScript {
    Complete {
        payment_id: String,
        signature: String,
    },
    Dismiss,
}

// Checkout gateway fake with a scripted outcome. Completions mirror the
// order id they were opened with, like the real provider does.
#[derive(Clone)]
pub(crate) struct ScriptedCheckout {
    script: CheckoutScript,
    requests: Arc<Mutex<Vec<CheckoutRequest>>>,
}

impl ScriptedCheckout {
    pub(crate) fn completing(payment_id: &str, signature: &str) -> Self {
        Self {
            script: CheckoutScript::Complete {
                payment_id: payment_id.to_string(),
                signature: signature.to_string(),
            },
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn dismissed() -> Self {
        Self {
            script: CheckoutScript::Dismiss,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests
            .lock()
            .expect("checkout requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl CheckoutGateway for ScriptedCheckout {
    async fn collect(&self, request: &CheckoutRequest) -> CheckoutOutcome {
        self.requests
            .lock()
            .expect("checkout requests mutex poisoned")
            .push(request.clone());
        match &self.script {
            CheckoutScript::Complete {
                payment_id,
                signature,
            } => CheckoutOutcome::Completed(PaymentConfirmation {
                order_id: request.order_id.clone(),
                payment_id: payment_id.clone(),
                signature: signature.clone(),
            }),
            CheckoutScript::Dismiss => CheckoutOutcome::Dismissed,
        }
    }
}

// Everything the controller pushed through the view, in order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ViewEvent {
    SearchBusy(bool),
    ReserveBusy(bool),
    ValidationError(String),
    ResultsCleared,
    OffersShown(usize),
    ResultsFocused,
    Notice(String),
    Error(String),
    GuestFormShown { summary: String, total: f64 },
    DateBounds {
        arrival_min: NaiveDate,
        departure_min: NaiveDate,
        departure: Option<NaiveDate>,
    },
    Redirected(String),
}

#[derive(Clone, Default)]
pub(crate) struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().expect("view events mutex poisoned").clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events
            .lock()
            .expect("view events mutex poisoned")
            .push(event);
    }
}

impl BookingView for RecordingView {
    fn set_search_busy(&self, busy: bool) {
        self.push(ViewEvent::SearchBusy(busy));
    }

    fn set_reserve_busy(&self, busy: bool) {
        self.push(ViewEvent::ReserveBusy(busy));
    }

    fn show_validation_error(&self, message: &str) {
        self.push(ViewEvent::ValidationError(message.to_string()));
    }

    fn clear_results(&self) {
        self.push(ViewEvent::ResultsCleared);
    }

    fn show_offers(&self, _query: &StayQuery, quotes: &[RoomQuote]) {
        self.push(ViewEvent::OffersShown(quotes.len()));
    }

    fn focus_results(&self) {
        self.push(ViewEvent::ResultsFocused);
    }

    fn show_notice(&self, message: &str) {
        self.push(ViewEvent::Notice(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn show_guest_form(&self, selection: &Selection) {
        self.push(ViewEvent::GuestFormShown {
            summary: selection.summary(),
            total: selection.quote.total,
        });
    }

    fn apply_date_bounds(&self, bounds: DateBounds, departure: Option<NaiveDate>) {
        self.push(ViewEvent::DateBounds {
            arrival_min: bounds.arrival_min,
            departure_min: bounds.departure_min,
            departure,
        });
    }

    fn redirect(&self, target: &Url) {
        self.push(ViewEvent::Redirected(target.to_string()));
    }
}
