//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod passenger_repository;
pub mod ticket_repository;

pub use config::AppConfig;
pub use passenger_repository::PostgresPassengerRepository;
pub use ticket_repository::PostgresTicketRepository;
