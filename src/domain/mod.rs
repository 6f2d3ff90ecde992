//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::passenger_repository::PassengerRepository;
pub use gateways::ticket_repository::TicketRepository;
pub use models::passenger::{Passenger, PassengerData, PassengerId};
pub use models::ticket::{NewTicket, Ticket, TicketData, TicketId};
