use crate::models::{ChatMessage, ReservationDraft, Step};

/// The one active wizard session: the draft being collected, the current
/// step, and the conversation so far. Owned by `AppState` and passed by
/// reference into the wizard's transition function.
#[derive(Debug, Default)]
pub struct Session {
    pub draft: ReservationDraft,
    pub step: Step,
    pub log: Vec<ChatMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the draft, returns the step to Start and empties the log.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.step = Step::Start;
        self.log.clear();
    }
}
