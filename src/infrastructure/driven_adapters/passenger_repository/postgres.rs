//! PostgreSQL Passenger Repository Implementation
//!
//! Implements the PassengerRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerData, PassengerId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the passengers table
#[derive(Debug, sqlx::FromRow)]
struct PassengerRow {
    id: i32,
    name: String,
    email: String,
    document: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PassengerRow> for Passenger {
    fn from(row: PassengerRow) -> Self {
        Passenger::restore(
            PassengerId::from_i32(row.id),
            row.name,
            row.email,
            row.document,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of PassengerRepository
pub struct PostgresPassengerRepository {
    pool: PgPool,
}

impl PostgresPassengerRepository {
    /// Create a new PostgresPassengerRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerRepository for PostgresPassengerRepository {
    async fn find_by_id(&self, id: PassengerId) -> Result<Option<Passenger>, RepositoryError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT id, name, email, document, created_at, updated_at
            FROM passengers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Passenger::from))
    }

    async fn find_all(&self) -> Result<Vec<Passenger>, RepositoryError> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT id, name, email, document, created_at, updated_at
            FROM passengers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Passenger::from).collect())
    }

    async fn create(&self, data: &PassengerData) -> Result<Passenger, RepositoryError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            INSERT INTO passengers (name, email, document)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, document, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.document)
        .fetch_one(&self.pool)
        .await?;

        Ok(Passenger::from(row))
    }

    async fn update(
        &self,
        id: PassengerId,
        data: &PassengerData,
    ) -> Result<Option<Passenger>, RepositoryError> {
        let row = sqlx::query_as::<_, PassengerRow>(
            r#"
            UPDATE passengers
            SET name = $2,
                email = $3,
                document = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, document, created_at, updated_at
            "#,
        )
        .bind(id.value())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.document)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Passenger::from))
    }

    async fn delete(&self, id: PassengerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM passengers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_document(
        &self,
        document: &str,
        exclude_id: Option<PassengerId>,
    ) -> Result<bool, RepositoryError> {
        let exists = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM passengers
                        WHERE document = $1 AND id != $2
                    )
                    "#,
                )
                .bind(document)
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM passengers WHERE document = $1
                    )
                    "#,
                )
                .bind(document)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(exists)
    }
}
