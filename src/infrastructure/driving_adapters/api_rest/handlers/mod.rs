//! HTTP Handlers
//!
//! Route definitions and request handlers for the REST API.

pub mod passengers;
pub mod tickets;
