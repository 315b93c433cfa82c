//! Stateless business rules.
//!
//! Currently this is payload validation; the stateful domain orchestration
//! lives in [`crate::db::services`].

pub mod validation;

pub use validation::{
    validate_classifier, validate_survey, ClassifierInput, SurveyInput, ValidatedClassifier,
    ValidatedSurvey, ValidationError,
};
