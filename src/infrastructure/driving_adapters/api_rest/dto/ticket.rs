//! Ticket DTOs
//!
//! Data transfer objects for ticket API endpoints.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::passenger::PassengerId;
use crate::domain::models::ticket::{Ticket, TicketData};

use super::passenger::PassengerResponseDto;

lazy_static! {
    /// Regex for validating airline-style seat labels (row number plus seat letter)
    static ref SEAT_REGEX: Regex = Regex::new(r"^[0-9]{1,2}[A-F]$").expect("valid regex");
}

/// Validates a seat label format
fn validate_seat(seat: &str) -> Result<(), validator::ValidationError> {
    if SEAT_REGEX.is_match(seat) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("seat");
        error.message = Some("Invalid seat format (must be a row number followed by a letter A-F)".into());
        Err(error)
    }
}

/// Validates that the departure time lies in the future
fn validate_future_departure(departure_at: &DateTime<Utc>) -> Result<(), validator::ValidationError> {
    if *departure_at > Utc::now() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("departure_at");
        error.message = Some("Departure time must be in the future".into());
        Err(error)
    }
}

/// Validates that an f64 can be safely converted to Decimal
fn validate_decimal(value: f64) -> Result<(), validator::ValidationError> {
    if !value.is_finite() {
        let mut error = validator::ValidationError::new("decimal");
        error.message = Some("Value must be a finite number".into());
        return Err(error);
    }
    if Decimal::try_from(value).is_err() {
        let mut error = validator::ValidationError::new("decimal");
        error.message = Some("Value cannot be represented as a decimal".into());
        return Err(error);
    }
    Ok(())
}

/// Safely converts f64 to Decimal, panics if validation wasn't performed
/// This should only be called after validate() has succeeded
fn f64_to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).expect("value should have been validated")
}

/// Request DTO shared by create (POST) and replace (PUT), carrying ticket
/// fields plus the bare id of the referenced passenger.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequestDto {
    #[validate(range(min = 1, message = "passenger_id must be at least 1"))]
    pub passenger_id: i32,

    #[validate(length(min = 1, max = 100, message = "origin must be between 1 and 100 characters"))]
    pub origin: String,

    #[validate(length(min = 1, max = 100, message = "destination must be between 1 and 100 characters"))]
    pub destination: String,

    #[validate(custom(function = "validate_future_departure"))]
    pub departure_at: DateTime<Utc>,

    #[validate(custom(function = "validate_seat"))]
    pub seat: String,

    #[validate(range(min = 0.0, message = "price must be at least 0"))]
    #[validate(custom(function = "validate_decimal"))]
    pub price: f64,
}

impl From<TicketRequestDto> for TicketData {
    fn from(dto: TicketRequestDto) -> Self {
        Self {
            passenger_id: PassengerId::from_i32(dto.passenger_id),
            origin: dto.origin,
            destination: dto.destination,
            departure_at: dto.departure_at,
            seat: dto.seat,
            price: f64_to_decimal(dto.price),
        }
    }
}

/// Ticket response DTO with its embedded passenger
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: i32,
    pub passenger: PassengerResponseDto,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub seat: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id().value(),
            passenger: PassengerResponseDto::from(ticket.passenger()),
            origin: ticket.origin().to_string(),
            destination: ticket.destination().to_string(),
            departure_at: ticket.departure_at(),
            seat: ticket.seat().to_string(),
            price: ticket.price().try_into().unwrap_or(0.0),
            created_at: ticket.created_at(),
            updated_at: ticket.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_dto() -> TicketRequestDto {
        TicketRequestDto {
            passenger_id: 1,
            origin: "Sao Paulo".to_string(),
            destination: "Rio de Janeiro".to_string(),
            departure_at: Utc::now() + Duration::days(30),
            seat: "12A".to_string(),
            price: 349.90,
        }
    }

    #[test]
    fn test_validate_seat_valid() {
        assert!(validate_seat("1A").is_ok());
        assert!(validate_seat("12F").is_ok());
        assert!(validate_seat("99B").is_ok());
    }

    #[test]
    fn test_validate_seat_invalid() {
        assert!(validate_seat("A12").is_err());
        assert!(validate_seat("12G").is_err());
        assert!(validate_seat("123A").is_err());
        assert!(validate_seat("").is_err());
    }

    #[test]
    fn test_validate_future_departure() {
        assert!(validate_future_departure(&(Utc::now() + Duration::hours(1))).is_ok());
        assert!(validate_future_departure(&(Utc::now() - Duration::hours(1))).is_err());
    }

    #[test]
    fn test_validate_decimal_valid() {
        assert!(validate_decimal(1.0).is_ok());
        assert!(validate_decimal(0.0).is_ok());
        assert!(validate_decimal(999999.99).is_ok());
    }

    #[test]
    fn test_validate_decimal_invalid() {
        assert!(validate_decimal(f64::INFINITY).is_err());
        assert!(validate_decimal(f64::NEG_INFINITY).is_err());
        assert!(validate_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_valid_dto_passes_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_dto_rejects_invalid_fields() {
        let mut dto = valid_dto();
        dto.passenger_id = 0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.origin = String::new();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.departure_at = Utc::now() - Duration::days(1);
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.seat = "window".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.price = -1.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dto_converts_to_ticket_data() {
        let dto = valid_dto();
        let data = TicketData::from(dto.clone());

        assert_eq!(data.passenger_id.value(), dto.passenger_id);
        assert_eq!(data.origin, dto.origin);
        assert_eq!(data.destination, dto.destination);
        assert_eq!(data.departure_at, dto.departure_at);
        assert_eq!(data.seat, dto.seat);
        assert_eq!(data.price, f64_to_decimal(dto.price));
    }
}
