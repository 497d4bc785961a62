use std::io;

use tokio::io::{BufReader, Stdin};

use crate::domain::stay::StayInput;
use crate::frameworks::config;
use crate::interface_adapters::clients::{BookingClient, PaymentClient};
use crate::interface_adapters::console::{self, ConsoleInput, ConsoleView, PromptCheckout};
use crate::interface_adapters::controller::BookingWidget;
use crate::interface_adapters::state::{FlowState, SystemClock};
use crate::use_cases::{CheckoutResult, SearchOutcome};

type ConsoleWidget = BookingWidget<
    BookingClient,
    PaymentClient,
    PromptCheckout<BufReader<Stdin>>,
    ConsoleView,
    SystemClock,
>;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> io::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "failed to load configuration");
            return Err(io::Error::other(error));
        }
    };
    let success_url = match config.success_url() {
        Ok(url) => url,
        Err(error) => {
            tracing::error!(%error, "invalid payment success URL");
            return Err(io::Error::other(error));
        }
    };
    tracing::info!(
        booking_api = %config.booking_api_url,
        payment_api = %config.payment_api_url,
        "booking widget starting"
    );

    let input = console::console_input();
    let mut widget: ConsoleWidget = BookingWidget {
        bookings: BookingClient::new(config.booking_api_url.clone()),
        payments: PaymentClient::new(config.payment_api_url.clone()),
        gateway: PromptCheckout::new(input.clone()),
        view: ConsoleView::new(config.currency_symbol.clone()),
        clock: SystemClock,
        success_url,
        branding: config.branding(),
        state: FlowState::default(),
    };
    widget.initialize();

    interact(&mut widget, &input).await
}

// One booking flow per pass: stay request, room pick, guest details,
// payment. A paid checkout ends the session the way the page redirect
// ends the browser flow.
async fn interact(widget: &mut ConsoleWidget, input: &ConsoleInput) -> io::Result<()> {
    println!("Resort room booking.");

    'flow: loop {
        let Some(stay) = prompt_stay(input).await? else {
            break 'flow;
        };
        let outcome = match widget.submit_search(stay).await {
            Ok(outcome) => outcome,
            // Violation already reported through the view.
            Err(_) => continue 'flow,
        };
        let quotes = match outcome {
            SearchOutcome::Offers(quotes) => quotes,
            SearchOutcome::NoRooms { .. } | SearchOutcome::Unreachable { .. } => continue 'flow,
        };

        let Some(index) = prompt_selection(input, quotes.len()).await? else {
            continue 'flow;
        };
        if widget.select_offer(index).is_err() {
            continue 'flow;
        }

        loop {
            let Some((name, email)) = prompt_guest(input).await? else {
                continue 'flow;
            };
            match widget.submit_guest_details(&name, &email).await {
                Ok(CheckoutResult::Paid { .. }) => break 'flow,
                // Dismissed and failed checkouts keep the selection;
                // the guest can resubmit.
                Ok(CheckoutResult::Dismissed | CheckoutResult::Failed { .. }) | Err(_) => continue,
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

async fn prompt_stay(input: &ConsoleInput) -> io::Result<Option<StayInput>> {
    let Some(arrival) =
        console::prompt_line(input, "\nArrival date (YYYY-MM-DD, empty to quit): ").await?
    else {
        return Ok(None);
    };
    if arrival.is_empty() {
        return Ok(None);
    }
    let Some(departure) = console::prompt_line(input, "Departure date (YYYY-MM-DD): ").await?
    else {
        return Ok(None);
    };
    let Some(guests) = console::prompt_line(input, "Guests: ").await? else {
        return Ok(None);
    };

    Ok(Some(StayInput {
        arrival: arrival.parse().ok(),
        departure: departure.parse().ok(),
        guests: guests.parse().ok(),
    }))
}

async fn prompt_selection(input: &ConsoleInput, count: usize) -> io::Result<Option<usize>> {
    loop {
        let label = format!("Select a room (1-{count}, empty to search again): ");
        let Some(choice) = console::prompt_line(input, &label).await? else {
            return Ok(None);
        };
        if choice.is_empty() {
            return Ok(None);
        }
        match choice.parse::<usize>() {
            Ok(no) if (1..=count).contains(&no) => return Ok(Some(no - 1)),
            _ => println!("Enter a number between 1 and {count}."),
        }
    }
}

async fn prompt_guest(input: &ConsoleInput) -> io::Result<Option<(String, String)>> {
    let Some(name) = console::prompt_line(input, "Guest name (empty to search again): ").await?
    else {
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }
    let Some(email) = console::prompt_line(input, "Email: ").await? else {
        return Ok(None);
    };
    Ok(Some((name, email)))
}
