use chrono::NaiveDate;

// Picker bounds for the two stay date inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateBounds {
    pub arrival_min: NaiveDate,
    pub departure_min: NaiveDate,
}

impl DateBounds {
    // Bounds for a freshly opened page: nothing before today.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            arrival_min: today,
            departure_min: today,
        }
    }

    // Bounds after the arrival input changed: the departure minimum
    // tracks the arrival value.
    pub fn with_arrival(self, arrival: NaiveDate) -> Self {
        Self {
            departure_min: arrival,
            ..self
        }
    }
}

// Keeps a chosen departure only while it is still strictly after the
// arrival; anything else is cleared.
pub fn retain_departure(arrival: NaiveDate, departure: Option<NaiveDate>) -> Option<NaiveDate> {
    departure.filter(|chosen| *chosen > arrival)
}
