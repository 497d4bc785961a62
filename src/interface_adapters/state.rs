use chrono::{Local, NaiveDate};

use crate::domain::offers::{RoomQuote, Selection};
use crate::domain::ports::Clock;
use crate::domain::stay::StayQuery;

// What the widget remembers between steps. Offers live here, not in the
// page, so a pick only ever references them by index.
#[derive(Default)]
pub struct FlowState {
    quotes: Vec<RoomQuote>,
    query: Option<StayQuery>,
    selection: Option<Selection>,
}

impl FlowState {
    // Dropping results also drops any selection made from them.
    pub fn reset_results(&mut self) {
        self.quotes.clear();
        self.query = None;
        self.selection = None;
    }

    pub fn store_offers(&mut self, query: StayQuery, quotes: Vec<RoomQuote>) {
        self.quotes = quotes;
        self.query = Some(query);
        self.selection = None;
    }

    // Picks an offer by index and mints a fresh reservation key for it.
    // Returns None when the index does not match a stored offer.
    pub fn select(&mut self, index: usize) -> Option<&Selection> {
        let quote = self.quotes.get(index)?.clone();
        let query = self.query?;
        self.selection = Some(Selection::new(quote, query));
        self.selection.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn quotes(&self) -> &[RoomQuote] {
        &self.quotes
    }
}

// Local calendar date, so date minimums follow the machine's timezone.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
