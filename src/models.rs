//! Domain enums shared by entities, services and request DTOs.
//!
//! Entities store these as strings; request input is parsed through
//! [`parse_enum`] so an out-of-range value fails validation before any
//! persistence call.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::errors::ServiceError;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum AnimalStatus {
    Active,
    Sold,
    Dead,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum BreedingType {
    Natural,
    #[strum(serialize = "AI")]
    #[serde(rename = "AI")]
    Ai,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum BreedingStatus {
    Bred,
    Pregnant,
    Calved,
    Failed,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum HeatIntensity {
    Mild,
    Moderate,
    Strong,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
pub enum CalfGender {
    Male,
    Female,
}

/// Parse a user-supplied enum value, mapping failure to a validation error
/// naming the offending field.
pub fn parse_enum<T: FromStr>(value: &str, field: &str) -> Result<T, ServiceError> {
    value
        .parse::<T>()
        .map_err(|_| ServiceError::Validation(format!("invalid value '{value}' for {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breeding_type_accepts_ai_spelling() {
        let t: BreedingType = parse_enum("AI", "breeding_type").unwrap();
        assert_eq!(t, BreedingType::Ai);
        assert_eq!(t.to_string(), "AI");
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = parse_enum::<AnimalStatus>("Retired", "status").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
