use uuid::Uuid;

use crate::domain::money;
use crate::domain::stay::StayQuery;

// One bookable room row from the availability response. Immutable once
// received.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomOffer {
    pub room_id: i64,
    pub name: String,
    pub price_per_night: f64,
    pub available_count: u32,
}

// Backend's answer to an availability query.
#[derive(Clone, Debug, PartialEq)]
pub enum Availability {
    Available(Vec<RoomOffer>),
    Unavailable { message: Option<String> },
}

// An offer priced for one concrete stay. The total is computed once,
// when the results render, and reused by every later step.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomQuote {
    pub offer: RoomOffer,
    pub nights: i64,
    pub total: f64,
}

impl RoomQuote {
    pub fn price(offer: RoomOffer, query: &StayQuery) -> Self {
        let nights = query.nights();
        let total = money::round_to_cents(offer.price_per_night * nights as f64);
        Self {
            offer,
            nights,
            total,
        }
    }
}

// The quote the guest picked, pinned to its stay. Each selection mints a
// fresh reservation key; retries of the same selection resend the same
// key so the backend can deduplicate pending reservations.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub quote: RoomQuote,
    pub query: StayQuery,
    pub reservation_key: String,
}

impl Selection {
    pub fn new(quote: RoomQuote, query: StayQuery) -> Self {
        Self {
            quote,
            query,
            reservation_key: Uuid::new_v4().to_string(),
        }
    }

    // Summary line shown above the guest details form.
    pub fn summary(&self) -> String {
        format!("{} | {} Guests", self.quote.offer.name, self.query.guests)
    }
}
