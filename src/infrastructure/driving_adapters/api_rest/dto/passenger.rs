//! Passenger DTOs
//!
//! Data transfer objects for passenger API endpoints.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::passenger::{Passenger, PassengerData};

lazy_static! {
    /// Regex for validating document numbers (11 digits, no separators)
    static ref DOCUMENT_REGEX: Regex = Regex::new(r"^[0-9]{11}$").expect("valid regex");
}

/// Validates a document number format
fn validate_document(document: &str) -> Result<(), validator::ValidationError> {
    if DOCUMENT_REGEX.is_match(document) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("document");
        error.message = Some("Invalid document format (must be exactly 11 digits)".into());
        Err(error)
    }
}

/// Request DTO shared by create (POST) and replace (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRequestDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid email address"))]
    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    pub email: String,

    #[validate(custom(function = "validate_document"))]
    pub document: String,
}

impl From<PassengerRequestDto> for PassengerData {
    fn from(dto: PassengerRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            document: dto.document,
        }
    }
}

/// Passenger response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponseDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub document: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Passenger> for PassengerResponseDto {
    fn from(passenger: Passenger) -> Self {
        Self::from(&passenger)
    }
}

impl From<&Passenger> for PassengerResponseDto {
    fn from(passenger: &Passenger) -> Self {
        Self {
            id: passenger.id().value(),
            name: passenger.name().to_string(),
            email: passenger.email().to_string(),
            document: passenger.document().to_string(),
            created_at: passenger.created_at(),
            updated_at: passenger.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> PassengerRequestDto {
        PassengerRequestDto {
            name: "Maria Silva".to_string(),
            email: "maria.silva@example.com".to_string(),
            document: "12345678901".to_string(),
        }
    }

    #[test]
    fn test_validate_document_valid() {
        assert!(validate_document("12345678901").is_ok());
        assert!(validate_document("00000000000").is_ok());
    }

    #[test]
    fn test_validate_document_invalid() {
        assert!(validate_document("123").is_err());
        assert!(validate_document("123456789012").is_err());
        assert!(validate_document("123.456.789-01").is_err());
        assert!(validate_document("abcdefghijk").is_err());
    }

    #[test]
    fn test_valid_dto_passes_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_dto_rejects_invalid_fields() {
        let mut dto = valid_dto();
        dto.name = String::new();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.document = "12345".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dto_converts_to_passenger_data() {
        let dto = valid_dto();
        let data = PassengerData::from(dto.clone());

        assert_eq!(data.name, dto.name);
        assert_eq!(data.email, dto.email);
        assert_eq!(data.document, dto.document);
    }
}
