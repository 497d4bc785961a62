use chrono::NaiveDate;
use thiserror::Error;
use url::Url;

use crate::domain::checkout::ReservationRequest;
use crate::domain::dates::{self, DateBounds};
use crate::domain::guest::{GuestDetails, GuestError};
use crate::domain::ports::{BookingApi, BookingView, CheckoutGateway, Clock, PaymentApi};
use crate::domain::stay::{StayError, StayInput};
use crate::interface_adapters::state::FlowState;
use crate::use_cases::checkout::CheckoutBranding;
use crate::use_cases::{AvailabilitySearch, CheckoutFlow, CheckoutResult, SearchOutcome};

pub const NO_SELECTION_MESSAGE: &str = "Please select a room first.";

// Offer picks that do not match a rendered card.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no offer at the selected index")]
    UnknownOffer,
}

// Guest submissions rejected before the checkout flow runs.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GuestStepError {
    #[error(transparent)]
    Validation(#[from] GuestError),
    #[error("no room selection is active")]
    NoSelection,
}

// The booking flow's entry points, one per page event. Owns the flow
// state; exactly one flow runs per widget instance, so the `&mut self`
// entry points cannot interleave two searches or two checkouts.
pub struct BookingWidget<B, P, G, V, C> {
    pub bookings: B,
    pub payments: P,
    pub gateway: G,
    pub view: V,
    pub clock: C,
    pub success_url: Url,
    pub branding: CheckoutBranding,
    pub state: FlowState,
}

impl<B, P, G, V, C> BookingWidget<B, P, G, V, C>
where
    B: BookingApi + Clone,
    P: PaymentApi + Clone,
    G: CheckoutGateway + Clone,
    V: BookingView,
    C: Clock,
{
    // First paint: arrival and departure cannot be set before today.
    pub fn initialize(&self) {
        let bounds = DateBounds::for_today(self.clock.today());
        self.view.apply_date_bounds(bounds, None);
    }

    // Stay submission. A rejected submission reports the violation and
    // leaves the page untouched; a valid one runs the availability
    // search with the busy state held for exactly the duration of the
    // call.
    #[tracing::instrument(
        name = "submit_search",
        skip_all,
        fields(arrival = ?input.arrival, departure = ?input.departure, guests = ?input.guests)
    )]
    pub async fn submit_search(&mut self, input: StayInput) -> Result<SearchOutcome, StayError> {
        let query = match input.validate() {
            Ok(query) => query,
            Err(err) => {
                self.view.show_validation_error(stay_message(err));
                return Err(err);
            }
        };

        self.view.set_search_busy(true);
        self.view.clear_results();
        self.state.reset_results();

        let search = AvailabilitySearch {
            api: self.bookings.clone(),
        };
        let outcome = search.execute(&query).await;
        match &outcome {
            SearchOutcome::Offers(quotes) => {
                self.state.store_offers(query, quotes.clone());
                self.view.show_offers(&query, self.state.quotes());
                self.view.focus_results();
            }
            SearchOutcome::NoRooms { message } | SearchOutcome::Unreachable { message } => {
                self.view.show_notice(message);
            }
        }
        self.view.set_search_busy(false);

        Ok(outcome)
    }

    // Card pick. Stores the selection (minting its reservation key) and
    // reveals the guest form; picking again overwrites the selection.
    pub fn select_offer(&mut self, index: usize) -> Result<(), SelectError> {
        let selection = self
            .state
            .select(index)
            .ok_or(SelectError::UnknownOffer)?;
        self.view.show_guest_form(selection);
        Ok(())
    }

    // Guest details submission. Validation failures and a missing
    // selection stop before any network call; otherwise the checkout
    // flow runs to one of its three terminal results. The busy state is
    // restored on every path except a paid redirect, which leaves the
    // page.
    #[tracing::instrument(name = "submit_guest_details", skip_all, fields(email = %email))]
    pub async fn submit_guest_details(
        &mut self,
        name: &str,
        email: &str,
    ) -> Result<CheckoutResult, GuestStepError> {
        let guest = match GuestDetails::parse(name, email) {
            Ok(guest) => guest,
            Err(err) => {
                self.view.show_validation_error(guest_message(err));
                return Err(GuestStepError::Validation(err));
            }
        };
        let Some(selection) = self.state.selection() else {
            self.view.show_validation_error(NO_SELECTION_MESSAGE);
            return Err(GuestStepError::NoSelection);
        };
        let request = ReservationRequest {
            selection: selection.clone(),
            guest,
        };

        self.view.set_reserve_busy(true);
        let flow = CheckoutFlow {
            bookings: self.bookings.clone(),
            payments: self.payments.clone(),
            gateway: self.gateway.clone(),
            success_url: self.success_url.clone(),
            branding: self.branding.clone(),
        };
        let result = flow.execute(&request).await;
        match &result {
            CheckoutResult::Paid { redirect } => {
                self.view.redirect(redirect);
            }
            CheckoutResult::Dismissed => {
                self.view.set_reserve_busy(false);
            }
            CheckoutResult::Failed { message, .. } => {
                self.view.show_error(message);
                self.view.set_reserve_busy(false);
            }
        }

        Ok(result)
    }

    // Arrival change: departure can never be set at or before the new
    // arrival. Returns the departure value that survived, if any.
    pub fn arrival_changed(
        &self,
        arrival: NaiveDate,
        departure: Option<NaiveDate>,
    ) -> Option<NaiveDate> {
        let bounds = DateBounds::for_today(self.clock.today()).with_arrival(arrival);
        let retained = dates::retain_departure(arrival, departure);
        self.view.apply_date_bounds(bounds, retained);
        retained
    }
}

fn stay_message(err: StayError) -> &'static str {
    match err {
        StayError::MissingArrival => "Arrival date is required.",
        StayError::MissingDeparture => "Departure date is required.",
        StayError::MissingGuests => "Number of guests is required.",
        StayError::TooFewGuests => "At least one guest is required.",
        StayError::DepartureNotAfterArrival => "Departure date must be after arrival date.",
    }
}

fn guest_message(err: GuestError) -> &'static str {
    match err {
        GuestError::MissingName => "Guest name is required.",
        GuestError::InvalidEmail => "A valid email address is required.",
    }
}
