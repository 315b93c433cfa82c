//! Stateless validation of inbound survey and classifier payloads.
//!
//! Rules are applied in a fixed order and the first failure is returned.
//! The rendered messages are part of the API contract, so the error type
//! owns the exact texts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::SurveyType;

/// Inbound payload for survey creation, all fields optional so that
/// missing fields surface as validation failures rather than parse errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyInput {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default, rename = "surveyRef")]
    pub survey_ref: Option<String>,
    /// Long name of the legal basis.
    #[serde(default, rename = "legalBasis")]
    pub legal_basis: Option<String>,
    /// Reference code of the legal basis.
    #[serde(default)]
    pub legal_basis_ref: Option<String>,
    #[serde(default)]
    pub survey_type: Option<String>,
}

/// Inbound payload for classifier selector creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classifier_types: Option<Vec<String>>,
}

/// A survey payload that passed validation.
///
/// Names are trimmed and the survey type is canonical. The legal-basis
/// fields are carried as supplied; the service resolves them against the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSurvey {
    pub short_name: String,
    pub long_name: String,
    pub reference: String,
    pub survey_type: SurveyType,
    pub legal_basis: Option<String>,
    pub legal_basis_ref: Option<String>,
}

/// A classifier payload that passed validation: trimmed name and a
/// non-empty list of trimmed classifier types, in the supplied order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedClassifier {
    pub name: String,
    pub classifier_types: Vec<String>,
}

/// Validation failure with its user-visible rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Survey failed to validate - Field '{field}' failed on the '{tag}' tag")]
    SurveyField {
        field: &'static str,
        tag: &'static str,
    },

    #[error("Survey type must be one of [Census, Business, Social]\n")]
    InvalidSurveyType,

    #[error("Survey failed to validate - Field 'legalBasis' failed on the 'required' tag")]
    MissingLegalBasis,

    #[error(
        "Classifier type selector failed to validate - Field '{field}' failed on the '{tag}' tag"
    )]
    ClassifierField {
        field: &'static str,
        tag: &'static str,
    },
}

fn survey_field(field: &'static str, tag: &'static str) -> ValidationError {
    ValidationError::SurveyField { field, tag }
}

fn classifier_field(field: &'static str, tag: &'static str) -> ValidationError {
    ValidationError::ClassifierField { field, tag }
}

fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

/// Validate a survey creation payload.
///
/// Rules, in order; the first failure wins:
/// 1. shortName: required, trimmed length 1..=20, no whitespace anywhere
/// 2. longName: required, length <= 100
/// 3. surveyRef: required, length <= 20, no whitespace
/// 4. surveyType: required, one of the known types (case-insensitive)
/// 5. at least one of legalBasis / legalBasisRef present
pub fn validate_survey(input: &SurveyInput) -> Result<ValidatedSurvey, ValidationError> {
    let short_name = input
        .short_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| survey_field("shortName", "required"))?;
    if short_name.len() > 20 {
        return Err(survey_field("shortName", "max"));
    }
    if has_whitespace(short_name) {
        return Err(survey_field("shortName", "no-spaces"));
    }

    let long_name = input
        .long_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| survey_field("longName", "required"))?;
    if long_name.len() > 100 {
        return Err(survey_field("longName", "max"));
    }

    let reference = input
        .survey_ref
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| survey_field("surveyRef", "required"))?;
    if reference.len() > 20 {
        return Err(survey_field("surveyRef", "max"));
    }
    if has_whitespace(reference) {
        return Err(survey_field("surveyRef", "no-spaces"));
    }

    let survey_type = input
        .survey_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| survey_field("surveyType", "required"))?;
    let survey_type =
        SurveyType::from_str(survey_type).map_err(|_| ValidationError::InvalidSurveyType)?;

    let legal_basis = input
        .legal_basis
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let legal_basis_ref = input
        .legal_basis_ref
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    if legal_basis.is_none() && legal_basis_ref.is_none() {
        return Err(ValidationError::MissingLegalBasis);
    }

    Ok(ValidatedSurvey {
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
        reference: reference.to_string(),
        survey_type,
        legal_basis,
        legal_basis_ref,
    })
}

/// Validate a classifier selector creation payload.
///
/// The name must be non-empty after trimming; classifierTypes must be a
/// non-empty array whose every element is non-empty after trimming.
pub fn validate_classifier(input: &ClassifierInput) -> Result<ValidatedClassifier, ValidationError> {
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| classifier_field("name", "required"))?;

    let types = input
        .classifier_types
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| classifier_field("classifierTypes", "required"))?;

    let mut classifier_types = Vec::with_capacity(types.len());
    for classifier_type in types {
        let trimmed = classifier_type.trim();
        if trimmed.is_empty() {
            return Err(classifier_field("classifierTypes", "required"));
        }
        classifier_types.push(trimmed.to_string());
    }

    Ok(ValidatedClassifier {
        name: name.to_string(),
        classifier_types,
    })
}
