//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod passenger;
pub mod ticket;

pub use passenger::{Passenger, PassengerData, PassengerId};
pub use ticket::{NewTicket, Ticket, TicketData, TicketId};
