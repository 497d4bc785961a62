use chrono::NaiveDate;
use thiserror::Error;

// Raw form input for the stay request. Every field is optional because
// the page can submit them empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StayInput {
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
    pub guests: Option<u32>,
}

// A validated stay request: arrival strictly before departure, at least
// one guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StayQuery {
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub guests: u32,
}

// Validation failures for the stay request form.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StayError {
    #[error("arrival date is required")]
    MissingArrival,
    #[error("departure date is required")]
    MissingDeparture,
    #[error("guest count is required")]
    MissingGuests,
    #[error("at least one guest is required")]
    TooFewGuests,
    #[error("departure date must be after arrival date")]
    DepartureNotAfterArrival,
}

impl StayInput {
    // Checks fields in form order and rejects before anything else runs:
    // a failed validation must leave the page untouched.
    pub fn validate(&self) -> Result<StayQuery, StayError> {
        let arrival = self.arrival.ok_or(StayError::MissingArrival)?;
        let departure = self.departure.ok_or(StayError::MissingDeparture)?;
        let guests = self.guests.ok_or(StayError::MissingGuests)?;

        if guests < 1 {
            return Err(StayError::TooFewGuests);
        }
        if arrival >= departure {
            return Err(StayError::DepartureNotAfterArrival);
        }

        Ok(StayQuery {
            arrival,
            departure,
            guests,
        })
    }
}

impl StayQuery {
    // Calendar nights between arrival and departure. At least 1 for any
    // query that passed validation.
    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }
}
