//! Ticket Use Cases
//!
//! Business logic for managing travel tickets.

mod create_ticket;
mod delete_ticket;
mod get_ticket_by_id;
mod list_tickets;
mod update_ticket;

pub use create_ticket::CreateTicketUseCase;
pub use delete_ticket::DeleteTicketUseCase;
pub use get_ticket_by_id::GetTicketByIdUseCase;
pub use list_tickets::ListTicketsUseCase;
pub use update_ticket::UpdateTicketUseCase;
