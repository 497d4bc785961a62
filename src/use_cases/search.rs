use tracing::{info, warn};

use crate::domain::offers::{Availability, RoomQuote};
use crate::domain::ports::BookingApi;
use crate::domain::stay::StayQuery;
use crate::use_cases::CONNECTIVITY_MESSAGE;

// Shown when the backend reports no availability without a message of
// its own.
pub const NO_ROOMS_FALLBACK: &str = "No rooms available for the selected criteria.";

// Outcome of one availability search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Offers(Vec<RoomQuote>),
    NoRooms { message: String },
    Unreachable { message: String },
}

// Availability search use case with an injected booking API.
pub struct AvailabilitySearch<A> {
    pub api: A,
}

impl<A> AvailabilitySearch<A>
where
    A: BookingApi,
{
    pub async fn execute(&self, query: &StayQuery) -> SearchOutcome {
        match self.api.check_availability(query).await {
            Ok(Availability::Available(offers)) if !offers.is_empty() => {
                let quotes: Vec<RoomQuote> = offers
                    .into_iter()
                    .map(|offer| RoomQuote::price(offer, query))
                    .collect();
                info!(
                    offers = quotes.len(),
                    nights = query.nights(),
                    "availability returned offers"
                );
                SearchOutcome::Offers(quotes)
            }
            Ok(Availability::Available(_)) => {
                info!("availability returned an empty room list");
                SearchOutcome::NoRooms {
                    message: NO_ROOMS_FALLBACK.to_string(),
                }
            }
            Ok(Availability::Unavailable { message }) => {
                let message = message.unwrap_or_else(|| NO_ROOMS_FALLBACK.to_string());
                info!(%message, "no rooms for the requested stay");
                SearchOutcome::NoRooms { message }
            }
            Err(err) => {
                warn!(error = %err, "availability call failed");
                SearchOutcome::Unreachable {
                    message: CONNECTIVITY_MESSAGE.to_string(),
                }
            }
        }
    }
}
