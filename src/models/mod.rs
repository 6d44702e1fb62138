pub mod conversation;
pub mod menu;
pub mod reservation;
pub mod session;

pub use conversation::{ChatMessage, Speaker};
pub use menu::MenuSection;
pub use reservation::{Reservation, ReservationDraft, Step};
pub use session::Session;
