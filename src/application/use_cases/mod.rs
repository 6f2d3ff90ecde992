//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod passengers;
pub mod tickets;

pub use passengers::{
    CreatePassengerUseCase, DeletePassengerUseCase, GetPassengerByIdUseCase, ListPassengersUseCase,
    UpdatePassengerUseCase,
};
pub use tickets::{
    CreateTicketUseCase, DeleteTicketUseCase, GetTicketByIdUseCase, ListTicketsUseCase,
    UpdateTicketUseCase,
};
