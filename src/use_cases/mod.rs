// Use cases layer: the availability search and the checkout flow.

pub mod checkout;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;

pub use checkout::{CheckoutFlow, CheckoutResult, CheckoutStage};
pub use search::{AvailabilitySearch, SearchOutcome};

// Fixed message for transport-level failures on any call.
pub const CONNECTIVITY_MESSAGE: &str =
    "A connection error occurred. Please ensure the backend server is running and the API is correct.";
