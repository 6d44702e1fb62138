use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use crate::db::queries;
use crate::models::{ChatMessage, Session, Speaker, Step};

/// Trigger substrings that start the wizard from the Start step. Matched
/// case-insensitively anywhere in the utterance.
const START_CUES: &[&str] = &["reserve", "reservation", "yes", "sure"];

const INTRO: &str = "Hi, I'm Dani, the reservation assistant for our restaurant. \
     I'm here to collect your reservation details. Would you like to reserve a table?";
const GREETING: &str =
    "Sure, I'd be happy to help with your reservation. First, can I have your name?";
const ASK_EMAIL: &str = "Got it! Could you please provide your email address?";
const ASK_GUESTS: &str = "Great! How many guests will be attending?";
const ASK_BABY_SEATS: &str = "Understood. How many baby seats do you need?";
const ASK_DATE: &str = "What date would you like to make the reservation for?";
const ASK_TIME: &str = "Got it. What time would you like the reservation for?";
const INVALID_DATE: &str = "Please enter a valid date in YYYY-MM-DD format.";
const INVALID_TIME: &str = "Please enter a valid time in HH:MM format.";
const CONFIRMED: &str =
    "Your reservation has been confirmed! If you need anything else, just let me know.";
const STORE_FAILED: &str = "Sorry, I couldn't save your reservation just now. \
     Could you give me the time again?";

/// Outcome of one wizard transition.
pub struct Turn {
    pub reply: String,
    pub step: Step,
    pub completed: bool,
}

/// Feeds one user utterance to the state machine: writes the field the
/// current step collects, appends the utterance and the reply to the log,
/// and advances the step. Date and time are format-checked; on a mismatch
/// the step holds and the user is re-prompted. A valid time completes the
/// draft, persists it and resets the session for the next caller.
pub fn process_utterance(session: &mut Session, conn: &Connection, input: &str) -> Turn {
    session.log.push(ChatMessage {
        speaker: Speaker::User,
        text: input.to_string(),
    });

    let mut completed = false;
    let mut reset_after = false;

    let reply: String = match session.step {
        Step::Start => {
            if has_start_cue(input) {
                session.step = Step::Name;
                GREETING.to_string()
            } else {
                INTRO.to_string()
            }
        }
        Step::Name => {
            session.draft.name = input.to_string();
            session.step = Step::Phone;
            format!("Nice to meet you, {input}. What's your phone number?")
        }
        Step::Phone => {
            session.draft.phone = input.to_string();
            session.step = Step::Email;
            ASK_EMAIL.to_string()
        }
        Step::Email => {
            session.draft.email = input.to_string();
            session.step = Step::Guests;
            ASK_GUESTS.to_string()
        }
        Step::Guests => {
            session.draft.guests = input.to_string();
            session.step = Step::BabySeats;
            ASK_BABY_SEATS.to_string()
        }
        Step::BabySeats => {
            session.draft.baby_seats = input.to_string();
            session.step = Step::Date;
            ASK_DATE.to_string()
        }
        Step::Date => match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(_) => {
                session.draft.date = input.to_string();
                session.step = Step::Time;
                ASK_TIME.to_string()
            }
            Err(_) => INVALID_DATE.to_string(),
        },
        Step::Time => match NaiveTime::parse_from_str(input, "%H:%M") {
            Ok(_) => {
                session.draft.time = input.to_string();
                match queries::insert_reservation(conn, &session.draft) {
                    Ok(id) => {
                        tracing::info!(id, name = %session.draft.name, "reservation stored");
                        completed = true;
                        reset_after = true;
                        CONFIRMED.to_string()
                    }
                    // Draft stays intact so re-entering the time retries the insert.
                    Err(e) => {
                        tracing::error!(error = %e, "failed to store reservation");
                        STORE_FAILED.to_string()
                    }
                }
            }
            Err(_) => INVALID_TIME.to_string(),
        },
    };

    session.log.push(ChatMessage {
        speaker: Speaker::Assistant,
        text: reply.clone(),
    });

    tracing::info!(step = session.step.as_str(), completed, "processed utterance");

    if reset_after {
        session.reset();
    }

    Turn {
        reply,
        step: session.step,
        completed,
    }
}

fn has_start_cue(input: &str) -> bool {
    let lowered = input.to_lowercase();
    START_CUES.iter().any(|cue| lowered.contains(cue))
}
