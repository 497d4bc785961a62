use std::io::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use url::Url;
use uuid::Uuid;

use crate::domain::checkout::{CheckoutOutcome, CheckoutRequest, PaymentConfirmation};
use crate::domain::dates::DateBounds;
use crate::domain::money;
use crate::domain::offers::{RoomQuote, Selection};
use crate::domain::ports::{BookingView, CheckoutGateway};
use crate::domain::stay::StayQuery;
use crate::interface_adapters::markup;

// Terminal adapters for running the widget without a page. The prompt
// reader is shared so the run loop and the checkout gateway take turns
// on the same stdin.
pub type ConsoleInput = Arc<Mutex<BufReader<Stdin>>>;

pub fn console_input() -> ConsoleInput {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin())))
}

// Prints the label, then reads one line. Returns None once the input
// is exhausted.
pub async fn prompt_line<R>(input: &Arc<Mutex<R>>, label: &str) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin + Send,
{
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = input.lock().await.read_line(&mut line).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// View adapter that narrates the page signals as terminal output.
#[derive(Clone)]
pub struct ConsoleView {
    currency_symbol: String,
}

impl ConsoleView {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl BookingView for ConsoleView {
    fn set_search_busy(&self, busy: bool) {
        if busy {
            println!("Checking availability...");
        }
    }

    fn set_reserve_busy(&self, busy: bool) {
        if busy {
            println!("Processing reservation...");
        }
    }

    fn show_validation_error(&self, message: &str) {
        println!("! {message}");
    }

    fn clear_results(&self) {}

    fn show_offers(&self, query: &StayQuery, quotes: &[RoomQuote]) {
        println!(
            "\nAvailable rooms, {} to {}:",
            markup::display_date(query.arrival),
            markup::display_date(query.departure)
        );
        for (index, quote) in quotes.iter().enumerate() {
            println!(
                "  {no}) {name}  {symbol}{nightly}/night, {available} available, total {symbol}{total} for {nights} nights",
                no = index + 1,
                name = quote.offer.name,
                symbol = self.currency_symbol,
                nightly = money::format_amount(quote.offer.price_per_night),
                available = quote.offer.available_count,
                total = money::format_amount(quote.total),
                nights = quote.nights,
            );
        }
    }

    fn focus_results(&self) {}

    fn show_notice(&self, message: &str) {
        println!("{message}");
    }

    fn show_error(&self, message: &str) {
        println!("! {message}");
    }

    fn show_guest_form(&self, selection: &Selection) {
        println!(
            "\n{summary}\nAmount Due: {symbol}{total}",
            summary = selection.summary(),
            symbol = self.currency_symbol,
            total = money::format_amount(selection.quote.total),
        );
    }

    // The terminal has no date pickers to constrain.
    fn apply_date_bounds(&self, _bounds: DateBounds, _departure: Option<NaiveDate>) {}

    fn redirect(&self, target: &Url) {
        println!("Redirecting to {target}");
    }
}

// Checkout gateway that stands in for the provider's modal: it shows
// the order and asks whether the guest pays. A confirmation carries
// provider-shaped ids minted locally.
pub struct PromptCheckout<R> {
    input: Arc<Mutex<R>>,
}

// Clones share the reader handle; R itself need not be Clone.
impl<R> Clone for PromptCheckout<R> {
    fn clone(&self) -> Self {
        Self {
            input: Arc::clone(&self.input),
        }
    }
}

impl PromptCheckout<BufReader<Stdin>> {
    pub fn new(input: ConsoleInput) -> Self {
        Self { input }
    }
}

#[cfg(test)]
impl<R> PromptCheckout<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn scripted(input: R) -> Self {
        Self {
            input: Arc::new(Mutex::new(input)),
        }
    }
}

#[async_trait]
impl<R> CheckoutGateway for PromptCheckout<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn collect(&self, request: &CheckoutRequest) -> CheckoutOutcome {
        println!("\n--- {} ---", request.merchant_name);
        println!("{}", request.description);
        println!(
            "Order {}: {} {}",
            request.order_id,
            money::format_amount(request.amount_minor as f64 / 100.0),
            request.currency,
        );

        let answer = match prompt_line(&self.input, "Complete payment? [y/N]: ").await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => return CheckoutOutcome::Dismissed,
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            return CheckoutOutcome::Dismissed;
        }

        CheckoutOutcome::Completed(PaymentConfirmation {
            order_id: request.order_id.clone(),
            payment_id: format!("pay_{}", Uuid::new_v4().simple()),
            signature: format!("sig_{}", Uuid::new_v4().simple()),
        })
    }
}
