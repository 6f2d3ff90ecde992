//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod passenger_repository;
pub mod ticket_repository;

pub use passenger_repository::PassengerRepository;
pub use ticket_repository::TicketRepository;
