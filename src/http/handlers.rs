//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one route: parse and validate the request,
//! delegate to the service layer, and map the outcome onto a status code
//! and body. UUID-shaped path parameters are validated here, before the
//! service sees them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::str::FromStr;
use uuid::Uuid;

use super::dto::{ClassifierInput, InfoResponse, SurveyInput, UpdateSurveyRequest};
use super::error::AppError;
use super::state::AppState;
use crate::api::SurveyType;
use crate::db::services as db_services;
use crate::services::validation::{validate_classifier, validate_survey, ValidationError};

/// Result type for handlers.
pub type HandlerResult = Result<Response, AppError>;

fn parse_uuid(literal: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(literal).map_err(|_| AppError::UuidMalformed(literal.to_string()))
}

/// 204 for an empty collection, 200 with the JSON array otherwise.
fn collection_response<T: serde::Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

/// GET /info
///
/// Version metadata; the only unauthenticated route.
pub async fn get_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        origin: option_env!("GIT_ORIGIN").unwrap_or_default().to_string(),
        commit: option_env!("GIT_COMMIT").unwrap_or_default().to_string(),
        branch: option_env!("GIT_BRANCH").unwrap_or_default().to_string(),
        built: option_env!("BUILD_TIME").unwrap_or_default().to_string(),
    })
}

/// GET /surveys
pub async fn list_surveys(State(state): State<AppState>) -> HandlerResult {
    let surveys = db_services::list_surveys(state.repository.as_ref()).await?;
    Ok(collection_response(surveys))
}

/// GET /surveys/surveytype/{survey_type}
pub async fn list_surveys_by_type(
    State(state): State<AppState>,
    Path(survey_type): Path<String>,
) -> HandlerResult {
    let survey_type = SurveyType::from_str(&survey_type)
        .map_err(|_| AppError::from(ValidationError::InvalidSurveyType))?;

    let surveys =
        db_services::list_surveys_by_type(state.repository.as_ref(), survey_type).await?;
    Ok(collection_response(surveys))
}

/// GET /surveys/{survey_id}
pub async fn get_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<String>,
) -> HandlerResult {
    let survey_id = parse_uuid(&survey_id)?;
    let survey = db_services::get_survey(state.repository.as_ref(), survey_id).await?;
    Ok(Json(survey).into_response())
}

/// GET /surveys/shortname/{short_name}
pub async fn get_survey_by_short_name(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
) -> HandlerResult {
    let survey =
        db_services::get_survey_by_short_name(state.repository.as_ref(), &short_name).await?;
    Ok(Json(survey).into_response())
}

/// GET /surveys/ref/{reference}
pub async fn get_survey_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> HandlerResult {
    let survey =
        db_services::get_survey_by_reference(state.repository.as_ref(), &reference).await?;
    Ok(Json(survey).into_response())
}

/// PUT /surveys/ref/{reference}
///
/// Updates the short and long names only; the reference and every other
/// column are untouched.
pub async fn update_survey_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Json(request): Json<UpdateSurveyRequest>,
) -> HandlerResult {
    let short_name = request.short_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let long_name = request.long_name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let (Some(short_name), Some(long_name)) = (short_name, long_name) else {
        return Err(AppError::BadRequest(
            "Survey failed to validate - shortName and longName are required".to_string(),
        ));
    };

    db_services::update_survey_names(state.repository.as_ref(), &reference, short_name, long_name)
        .await?;
    Ok(StatusCode::OK.into_response())
}

/// POST /surveys
pub async fn create_survey(
    State(state): State<AppState>,
    Json(request): Json<SurveyInput>,
) -> HandlerResult {
    let input = validate_survey(&request)?;
    let survey = db_services::create_survey(state.repository.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(survey)).into_response())
}

/// GET /surveys/{survey_id}/classifiertypeselectors
pub async fn list_classifier_selectors(
    State(state): State<AppState>,
    Path(survey_id): Path<String>,
) -> HandlerResult {
    let survey_id = parse_uuid(&survey_id)?;
    let selectors = db_services::list_selectors(state.repository.as_ref(), survey_id).await?;
    Ok(collection_response(selectors))
}

/// GET /surveys/{survey_id}/classifiertypeselectors/{selector_id}
pub async fn get_classifier_selector(
    State(state): State<AppState>,
    Path((survey_id, selector_id)): Path<(String, String)>,
) -> HandlerResult {
    let survey_id = parse_uuid(&survey_id)?;
    let selector_id = parse_uuid(&selector_id)?;
    let selector =
        db_services::get_selector(state.repository.as_ref(), survey_id, selector_id).await?;
    Ok(Json(selector).into_response())
}

/// POST /surveys/{survey_id}/classifiers
pub async fn create_classifiers(
    State(state): State<AppState>,
    Path(survey_id): Path<String>,
    Json(request): Json<ClassifierInput>,
) -> HandlerResult {
    let survey_id = parse_uuid(&survey_id)?;
    let input = validate_classifier(&request)?;
    let selector =
        db_services::create_classifiers(state.repository.as_ref(), survey_id, input).await?;
    Ok((StatusCode::CREATED, Json(selector)).into_response())
}
