use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use tracing::warn;

use crate::domain::checkout::{PaymentOrder, ReservationRecord, ReservationRequest};
use crate::domain::errors::BackendError;
use crate::domain::offers::{Availability, RoomOffer};
use crate::domain::ports::{BookingApi, PaymentApi};
use crate::domain::stay::StayQuery;
use crate::interface_adapters::protocol::{
    AvailabilityRequest, AvailabilityResponse, BookingErrorBody, CreateOrderRequest,
    CreateOrderResponse, PaymentErrorBody, ReserveRequest, ReserveResponse,
};

// Thin reqwest wrappers around the booking and payment services. Built
// without timeouts: a call resolves, rejects, or hangs, and the flow
// has no mechanism to abandon a hung call.

#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport error: {err}"),
            ApiError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "upstream error {status}: {message}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            ApiError::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

// Maps a client error into the domain's failure classes for the
// reservation and order stages: upstream answers keep their message,
// malformed bodies fall back to the stage default.
fn backend_rejection(err: ApiError) -> BackendError {
    match err {
        ApiError::Transport(_) => BackendError::Unreachable,
        ApiError::Upstream { message, .. } => BackendError::Rejected { message },
        ApiError::Decode(_) => BackendError::Rejected { message: None },
    }
}

#[derive(Clone)]
pub struct BookingClient {
    http: Client,
    pub base_url: String,
}

impl BookingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post_availability(
        &self,
        query: &StayQuery,
    ) -> Result<AvailabilityResponse, ApiError> {
        let url = format!("{}/check-availability", self.base_url);
        let payload = AvailabilityRequest {
            arrival_date: query.arrival,
            departure_date: query.departure,
            number_of_guests: query.guests,
        };
        let res = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<BookingErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Upstream { status, message });
        }

        res.json::<AvailabilityResponse>()
            .await
            .map_err(ApiError::Decode)
    }

    async fn post_reserve(&self, request: &ReservationRequest) -> Result<ReserveResponse, ApiError> {
        let url = format!("{}/reserve", self.base_url);
        let selection = &request.selection;
        let payload = ReserveRequest {
            room_id: selection.quote.offer.room_id,
            arrival_date: selection.query.arrival,
            departure_date: selection.query.departure,
            number_of_guests: selection.query.guests,
            price: selection.quote.total,
            name: request.guest.name.clone(),
            email: request.guest.email.clone(),
            reservation_key: selection.reservation_key.clone(),
        };
        let res = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = res.status();

        // Keep the upstream message so the guest sees the backend's own
        // reason for turning the reservation down.
        if !status.is_success() {
            let message = res
                .json::<BookingErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Upstream { status, message });
        }

        res.json::<ReserveResponse>().await.map_err(ApiError::Decode)
    }
}

#[async_trait]
impl BookingApi for BookingClient {
    async fn check_availability(&self, query: &StayQuery) -> Result<Availability, BackendError> {
        // Any HTTP-level failure on the availability call is a
        // connectivity problem; only a parsed body is classified.
        let body = match self.post_availability(query).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "availability request failed");
                return Err(BackendError::Unreachable);
            }
        };
        Ok(map_availability(body))
    }

    async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationRecord, BackendError> {
        let body = match self.post_reserve(request).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "reserve request failed");
                return Err(backend_rejection(err));
            }
        };
        match (body.booking_id, body.amount) {
            (Some(booking_id), Some(amount)) => Ok(ReservationRecord { booking_id, amount }),
            _ => {
                warn!("reserve response was missing bookingId or amount");
                Err(BackendError::Rejected { message: None })
            }
        }
    }
}

fn map_availability(body: AvailabilityResponse) -> Availability {
    if body.status.as_deref() == Some("AVAILABLE") {
        let offers = body
            .rooms
            .unwrap_or_default()
            .into_iter()
            .map(|row| RoomOffer {
                room_id: row.room_id,
                name: row.name,
                price_per_night: row.price,
                available_count: row.available_count,
            })
            .collect();
        Availability::Available(offers)
    } else {
        Availability::Unavailable {
            message: body.message,
        }
    }
}

#[derive(Clone)]
pub struct PaymentClient {
    http: Client,
    pub base_url: String,
}

impl PaymentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post_create_order(
        &self,
        reservation: &ReservationRecord,
    ) -> Result<CreateOrderResponse, ApiError> {
        let url = format!("{}/create-order", self.base_url);
        let payload = CreateOrderRequest {
            booking_id: reservation.booking_id,
            amount: reservation.amount,
        };
        let res = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<PaymentErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::Upstream { status, message });
        }

        res.json::<CreateOrderResponse>()
            .await
            .map_err(ApiError::Decode)
    }
}

#[async_trait]
impl PaymentApi for PaymentClient {
    async fn create_order(
        &self,
        reservation: &ReservationRecord,
    ) -> Result<PaymentOrder, BackendError> {
        let body = match self.post_create_order(reservation).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "create-order request failed");
                return Err(backend_rejection(err));
            }
        };
        match (body.order_id, body.razorpay_key_id) {
            (Some(order_id), Some(provider_key)) => Ok(PaymentOrder {
                order_id,
                provider_key,
            }),
            _ => {
                warn!("create-order response was missing orderId or key");
                Err(BackendError::Rejected { message: None })
            }
        }
    }
}
