// Money helpers for amounts carried as f64 currency units on the wire.

// Rounds an amount to whole cents, halves away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// Converts currency units into the payment gateway's integer minor
// units. Halves round away from zero, so 1234.5 becomes 123450.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

// Two-decimal display form used by cards and summaries.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
