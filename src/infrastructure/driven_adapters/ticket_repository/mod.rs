//! Ticket Repository Adapters

pub mod postgres;

pub use postgres::PostgresTicketRepository;
