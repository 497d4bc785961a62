use chrono::NaiveDate;

use crate::domain::money;
use crate::domain::offers::{RoomQuote, Selection};
use crate::domain::stay::StayQuery;

// Markup builders for the widget's page regions. Every interpolated
// value passes through `escape`, so backend-supplied text cannot inject
// markup.

// Escapes text for interpolation into element content or attribute
// values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// "Dec 1, 2025" style display dates.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn results_header(query: &StayQuery) -> String {
    format!(
        "<h3>Available Rooms ({} - {})</h3>",
        display_date(query.arrival),
        display_date(query.departure)
    )
}

// One selectable card. The trigger carries the offer index; everything
// else a later step needs lives in the flow state, not the page.
pub fn room_card(index: usize, quote: &RoomQuote, query: &StayQuery, symbol: &str) -> String {
    let symbol = escape(symbol);
    format!(
        concat!(
            "<div class=\"availability__result_card\">",
            "<h4>{name}</h4>",
            "<p>{symbol}{nightly} / night</p>",
            "<p>Max Guests: {guests} | Available: {available}</p>",
            "<p class=\"availability__total\">Total: {symbol}{total} ({nights} nights)</p>",
            "<button type=\"button\" data-offer-index=\"{index}\">Select Room</button>",
            "</div>"
        ),
        name = escape(&quote.offer.name),
        symbol = symbol,
        nightly = money::format_amount(quote.offer.price_per_night),
        guests = query.guests,
        available = quote.offer.available_count,
        total = money::format_amount(quote.total),
        nights = quote.nights,
        index = index,
    )
}

// The full results region: header plus one card per quote.
pub fn results(query: &StayQuery, quotes: &[RoomQuote], symbol: &str) -> String {
    let mut html = results_header(query);
    for (index, quote) in quotes.iter().enumerate() {
        html.push_str(&room_card(index, quote, query, symbol));
    }
    html
}

// No-rooms and connectivity notices share one region.
pub fn notice(message: &str) -> String {
    format!(
        "<p class=\"availability__no_rooms\">{}</p>",
        escape(message)
    )
}

// Summary block shown above the guest details form.
pub fn guest_summary(selection: &Selection, symbol: &str) -> String {
    format!(
        concat!(
            "<p class=\"guest__summary\">{summary}</p>",
            "<p class=\"guest__amount\">Amount Due: {symbol}{total}</p>"
        ),
        summary = escape(&selection.summary()),
        symbol = escape(symbol),
        total = money::format_amount(selection.quote.total),
    )
}
