use serde::{Deserialize, Serialize};

/// Position in the fixed seven-field collection sequence. Fields are filled
/// strictly in this order; the step only moves forward on a successful
/// transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Start,
    Name,
    Phone,
    Email,
    Guests,
    BabySeats,
    Date,
    Time,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::Name => "name",
            Step::Phone => "phone",
            Step::Email => "email",
            Step::Guests => "guests",
            Step::BabySeats => "baby_seats",
            Step::Date => "date",
            Step::Time => "time",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Start
    }
}

/// The in-progress reservation for the active session. All fields are stored
/// as the user typed them; only date and time are format-checked before being
/// written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: String,
    pub baby_seats: String,
    pub date: String,
    pub time: String,
}

impl ReservationDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A completed reservation as persisted. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: String,
    pub baby_seats: String,
    pub date: String,
    pub time: String,
}
