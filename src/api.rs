//! Core domain types for the survey catalog.
//!
//! These types cross every layer: the repository maps database rows into
//! them, the service layer returns them, and the HTTP adapter serializes
//! them straight onto the wire. Wire field names follow the published JSON
//! contract (`surveyRef`, `legalBasis`, camelCase elsewhere).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of survey types.
///
/// Parsed case-insensitively on input and always rendered in canonical
/// casing. Stored canonically in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyType {
    Census,
    Business,
    Social,
}

impl SurveyType {
    /// All valid survey types, in canonical order.
    pub const ALL: [SurveyType; 3] = [SurveyType::Census, SurveyType::Business, SurveyType::Social];

    /// Canonical string rendering, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyType::Census => "Census",
            SurveyType::Business => "Business",
            SurveyType::Social => "Social",
        }
    }
}

impl fmt::Display for SurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known survey types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSurveyType(pub String);

impl fmt::Display for UnknownSurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown survey type: {}", self.0)
    }
}

impl std::error::Error for UnknownSurveyType {}

impl FromStr for SurveyType {
    type Err = UnknownSurveyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurveyType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownSurveyType(s.to_string()))
    }
}

/// A statistical survey as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// Opaque identifier, assigned on creation.
    pub id: Uuid,
    /// Abbreviation, unique case-sensitively, no whitespace.
    pub short_name: String,
    pub long_name: String,
    /// Reference code, unique case-insensitively.
    #[serde(rename = "surveyRef")]
    pub reference: String,
    /// Long name of the legal basis, taken from the catalog row.
    #[serde(rename = "legalBasis")]
    pub legal_basis: String,
    pub survey_type: SurveyType,
    /// Reference code of the legal basis catalog row.
    pub legal_basis_ref: String,
}

/// A (reference, long name) pair from the read-only legal-basis catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalBasis {
    pub reference: String,
    pub long_name: String,
}

/// Listing entry for a classifier type selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierTypeSelectorSummary {
    pub id: Uuid,
    pub name: String,
}

/// A classifier type selector with its classifier types.
///
/// Selectors are created as an atomic unit with at least one classifier
/// type; listings return the types sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierTypeSelector {
    pub id: Uuid,
    pub name: String,
    pub classifier_types: Vec<String>,
}

/// Structured error body used for domain not-found responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestError {
    pub code: String,
    pub message: String,
    /// Unix seconds, rendered as a string.
    pub timestamp: String,
}

impl RestError {
    /// Build a not-found body for the given resource description.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "404".to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
