//! PostgreSQL Ticket Repository Implementation
//!
//! Implements the TicketRepository trait using SQLx for PostgreSQL.
//! Tickets are always read joined with their passenger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::TicketRepository;
use crate::domain::models::passenger::{Passenger, PassengerId};
use crate::domain::models::ticket::{NewTicket, Ticket, TicketId};
use crate::shared::errors::RepositoryError;

/// Joined row representation for tickets with their passenger
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    origin: String,
    destination: String,
    departure_at: DateTime<Utc>,
    seat: String,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    passenger_id: i32,
    passenger_name: String,
    passenger_email: String,
    passenger_document: String,
    passenger_created_at: DateTime<Utc>,
    passenger_updated_at: DateTime<Utc>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        let passenger = Passenger::restore(
            PassengerId::from_i32(row.passenger_id),
            row.passenger_name,
            row.passenger_email,
            row.passenger_document,
            row.passenger_created_at,
            row.passenger_updated_at,
        );

        Ticket::restore(
            TicketId::from_i32(row.id),
            passenger,
            row.origin,
            row.destination,
            row.departure_at,
            row.seat,
            row.price,
            row.created_at,
            row.updated_at,
        )
    }
}

/// Timestamps assigned by the database on insert/update
#[derive(Debug, sqlx::FromRow)]
struct WrittenTicketRow {
    id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const SELECT_TICKET: &str = r#"
    SELECT t.id, t.origin, t.destination, t.departure_at, t.seat, t.price,
           t.created_at, t.updated_at,
           p.id AS passenger_id, p.name AS passenger_name, p.email AS passenger_email,
           p.document AS passenger_document, p.created_at AS passenger_created_at,
           p.updated_at AS passenger_updated_at
    FROM tickets t
    JOIN passengers p ON p.id = t.passenger_id
"#;

/// PostgreSQL implementation of TicketRepository
pub struct PostgresTicketRepository {
    pool: PgPool,
}

impl PostgresTicketRepository {
    /// Create a new PostgresTicketRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PostgresTicketRepository {
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, RepositoryError> {
        let row = sqlx::query_as::<_, TicketRow>(&format!("{SELECT_TICKET} WHERE t.id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Ticket::from))
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
        let rows = sqlx::query_as::<_, TicketRow>(&format!(
            "{SELECT_TICKET} ORDER BY t.departure_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn create(&self, ticket: &NewTicket) -> Result<Ticket, RepositoryError> {
        let row = sqlx::query_as::<_, WrittenTicketRow>(
            r#"
            INSERT INTO tickets (passenger_id, origin, destination, departure_at, seat, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(ticket.passenger().id().value())
        .bind(ticket.origin())
        .bind(ticket.destination())
        .bind(ticket.departure_at())
        .bind(ticket.seat())
        .bind(ticket.price())
        .fetch_one(&self.pool)
        .await?;

        Ok(Ticket::restore(
            TicketId::from_i32(row.id),
            ticket.passenger().clone(),
            ticket.origin().to_string(),
            ticket.destination().to_string(),
            ticket.departure_at(),
            ticket.seat().to_string(),
            ticket.price(),
            row.created_at,
            row.updated_at,
        ))
    }

    async fn update(&self, id: TicketId, ticket: &NewTicket) -> Result<Option<Ticket>, RepositoryError> {
        let row = sqlx::query_as::<_, WrittenTicketRow>(
            r#"
            UPDATE tickets
            SET passenger_id = $2,
                origin = $3,
                destination = $4,
                departure_at = $5,
                seat = $6,
                price = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(id.value())
        .bind(ticket.passenger().id().value())
        .bind(ticket.origin())
        .bind(ticket.destination())
        .bind(ticket.departure_at())
        .bind(ticket.seat())
        .bind(ticket.price())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            Ticket::restore(
                TicketId::from_i32(row.id),
                ticket.passenger().clone(),
                ticket.origin().to_string(),
                ticket.destination().to_string(),
                ticket.departure_at(),
                ticket.seat().to_string(),
                ticket.price(),
                row.created_at,
                row.updated_at,
            )
        }))
    }

    async fn delete(&self, id: TicketId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tickets
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_for_passenger(&self, passenger_id: PassengerId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM tickets WHERE passenger_id = $1
            )
            "#,
        )
        .bind(passenger_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
