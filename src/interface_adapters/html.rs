use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use url::Url;

use crate::domain::dates::DateBounds;
use crate::domain::offers::{RoomQuote, Selection};
use crate::domain::ports::BookingView;
use crate::domain::stay::StayQuery;
use crate::interface_adapters::markup;

pub const SEARCH_LABEL: &str = "Check Availability";
pub const SEARCH_BUSY_LABEL: &str = "Checking...";
pub const RESERVE_LABEL: &str = "Confirm Reservation & Pay";
pub const RESERVE_BUSY_LABEL: &str = "Processing Reservation...";
pub const RESULTS_ANCHOR: &str = "available-rooms-section";

// A submit control as the page shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    fn idle(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }

    fn busy(label: &str) -> Self {
        Self {
            enabled: false,
            label: label.to_string(),
        }
    }
}

// Everything the widget has put on the page. Hosts read this to render;
// tests read it to assert.
#[derive(Clone, Debug)]
pub struct PageSnapshot {
    pub search_control: ControlState,
    pub reserve_control: ControlState,
    pub results_html: String,
    pub results_visible: bool,
    pub guest_form_html: String,
    pub guest_form_visible: bool,
    pub focused_anchor: Option<String>,
    pub alerts: Vec<String>,
    pub arrival_min: Option<NaiveDate>,
    pub departure_min: Option<NaiveDate>,
    pub departure_value: Option<NaiveDate>,
    pub redirect: Option<String>,
}

impl PageSnapshot {
    fn new() -> Self {
        Self {
            search_control: ControlState::idle(SEARCH_LABEL),
            reserve_control: ControlState::idle(RESERVE_LABEL),
            results_html: String::new(),
            results_visible: false,
            guest_form_html: String::new(),
            guest_form_visible: false,
            focused_anchor: None,
            alerts: Vec::new(),
            arrival_min: None,
            departure_min: None,
            departure_value: None,
            redirect: None,
        }
    }
}

// View adapter that renders into an in-memory page model instead of a
// live DOM. Shared behind a mutex so the widget and the host can hold
// clones.
#[derive(Clone)]
pub struct HtmlView {
    page: Arc<Mutex<PageSnapshot>>,
    currency_symbol: String,
}

impl HtmlView {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            page: Arc::new(Mutex::new(PageSnapshot::new())),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.lock().expect("page mutex poisoned").clone()
    }

    fn update(&self, apply: impl FnOnce(&mut PageSnapshot)) {
        let mut page = self.page.lock().expect("page mutex poisoned");
        apply(&mut page);
    }
}

impl BookingView for HtmlView {
    fn set_search_busy(&self, busy: bool) {
        self.update(|page| {
            page.search_control = if busy {
                ControlState::busy(SEARCH_BUSY_LABEL)
            } else {
                ControlState::idle(SEARCH_LABEL)
            };
        });
    }

    fn set_reserve_busy(&self, busy: bool) {
        self.update(|page| {
            page.reserve_control = if busy {
                ControlState::busy(RESERVE_BUSY_LABEL)
            } else {
                ControlState::idle(RESERVE_LABEL)
            };
        });
    }

    fn show_validation_error(&self, message: &str) {
        self.update(|page| page.alerts.push(message.to_string()));
    }

    fn clear_results(&self) {
        self.update(|page| {
            page.results_html.clear();
            page.results_visible = false;
            page.guest_form_html.clear();
            page.guest_form_visible = false;
            page.focused_anchor = None;
        });
    }

    fn show_offers(&self, query: &StayQuery, quotes: &[RoomQuote]) {
        let html = markup::results(query, quotes, &self.currency_symbol);
        self.update(|page| {
            page.results_html = html;
            page.results_visible = true;
        });
    }

    fn focus_results(&self) {
        self.update(|page| page.focused_anchor = Some(RESULTS_ANCHOR.to_string()));
    }

    fn show_notice(&self, message: &str) {
        let html = markup::notice(message);
        self.update(|page| {
            page.results_html = html;
            page.results_visible = true;
        });
    }

    fn show_error(&self, message: &str) {
        self.update(|page| page.alerts.push(message.to_string()));
    }

    fn show_guest_form(&self, selection: &Selection) {
        let html = markup::guest_summary(selection, &self.currency_symbol);
        self.update(|page| {
            page.results_visible = false;
            page.guest_form_html = html;
            page.guest_form_visible = true;
        });
    }

    fn apply_date_bounds(&self, bounds: DateBounds, departure: Option<NaiveDate>) {
        self.update(|page| {
            page.arrival_min = Some(bounds.arrival_min);
            page.departure_min = Some(bounds.departure_min);
            page.departure_value = departure;
        });
    }

    fn redirect(&self, url: &Url) {
        self.update(|page| page.redirect = Some(url.to_string()));
    }
}
