//! Travel Ticket Registry API
//!
//! A Rust-based microservice for managing travel tickets and passengers
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
