//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod passenger;
pub mod ticket;

pub use passenger::{PassengerRequestDto, PassengerResponseDto};
pub use ticket::{TicketRequestDto, TicketResponseDto};
