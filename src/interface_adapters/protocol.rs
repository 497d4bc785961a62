use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Wire DTOs for the booking and payment services. Field names follow
// the backends' JSON contracts; unknown fields are ignored on the way
// in, and the backends ignore extras on the way out.

// Request payload for the availability query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub number_of_guests: u32,
}

// Response payload for the availability query. Every field is optional
// so that any well-formed JSON answer can be classified.
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub status: Option<String>,
    pub rooms: Option<Vec<RoomRow>>,
    pub message: Option<String>,
}

// One room row inside an availability response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub room_id: i64,
    pub name: String,
    pub available_count: u32,
    pub price: f64,
}

// Request payload for creating a pending reservation. `price` is the
// stay total; `reservation_key` dedupes retries of one selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub room_id: i64,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub number_of_guests: u32,
    pub price: f64,
    pub name: String,
    pub email: String,
    pub reservation_key: String,
}

// Response payload for a reservation. A success body must carry both
// fields; anything less is treated as a rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveResponse {
    pub booking_id: Option<i64>,
    pub amount: Option<f64>,
}

// Request payload for opening a payment order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub booking_id: i64,
    pub amount: f64,
}

// Response payload for a payment order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: Option<String>,
    pub razorpay_key_id: Option<String>,
}

// Error bodies differ between the two services: the booking service
// answers with `message`, the payment service with `error`.
#[derive(Debug, Deserialize)]
pub struct BookingErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentErrorBody {
    pub error: Option<String>,
}
