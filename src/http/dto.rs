//! Data Transfer Objects for the HTTP API.
//!
//! The domain types in [`crate::api`] serialize directly as response
//! bodies; request payloads for create operations live with the validator
//! and are re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::api::{ClassifierTypeSelector, ClassifierTypeSelectorSummary, Survey};
pub use crate::services::validation::{ClassifierInput, SurveyInput};

/// Request body for updating a survey's names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSurveyRequest {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
}

/// Build and version metadata returned by `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub origin: String,
    pub commit: String,
    pub branch: String,
    pub built: String,
}
