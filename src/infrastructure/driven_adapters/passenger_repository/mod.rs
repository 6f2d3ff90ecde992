//! Passenger Repository Adapters

pub mod postgres;

pub use postgres::PostgresPassengerRepository;
