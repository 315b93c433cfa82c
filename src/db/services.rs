//! Domain service layer.
//!
//! High-level operations over any repository implementation. These
//! functions own the write protocols: legal-basis resolution, uniqueness
//! pre-checks, UUID assignment, and the mapping of late constraint
//! violations (concurrent creators slipping past a pre-check) onto the same
//! user-visible outcome as the pre-check path.

use tracing::info;
use uuid::Uuid;

use crate::api::{ClassifierTypeSelector, ClassifierTypeSelectorSummary, Survey, SurveyType};
use crate::db::repository::{CreateSelectorOutcome, FullRepository, RepositoryError};
use crate::services::validation::{ValidatedClassifier, ValidatedSurvey};

/// Domain outcome of a service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Neither the supplied legal-basis long name nor reference matched a
    /// catalog row.
    #[error("Legal basis {0} does not exist")]
    LegalBasisNotFound(String),

    /// A survey with the same reference exists (case-insensitive).
    #[error("Survey with reference {0} already exists")]
    DuplicateReference(String),

    /// A survey with the same short name exists (exact match).
    #[error("The survey with Abbreviation {0} already exists")]
    DuplicateShortName(String),

    #[error("Survey not found")]
    SurveyNotFound,

    #[error("Classifier type selector not found")]
    SelectorNotFound,

    /// A selector with the same name already exists on the survey.
    #[error("Classifier type selector already exists")]
    SelectorConflict,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// All surveys, ascending by short name.
pub async fn list_surveys(repo: &dyn FullRepository) -> ServiceResult<Vec<Survey>> {
    Ok(repo.list_surveys().await?)
}

/// Surveys of one type, ascending by short name. The caller canonicalizes
/// the type before this point.
pub async fn list_surveys_by_type(
    repo: &dyn FullRepository,
    survey_type: SurveyType,
) -> ServiceResult<Vec<Survey>> {
    Ok(repo.list_surveys_by_type(survey_type).await?)
}

pub async fn get_survey(repo: &dyn FullRepository, id: Uuid) -> ServiceResult<Survey> {
    repo.get_survey(id).await?.ok_or(ServiceError::SurveyNotFound)
}

pub async fn get_survey_by_short_name(
    repo: &dyn FullRepository,
    short_name: &str,
) -> ServiceResult<Survey> {
    repo.get_survey_by_short_name(short_name)
        .await?
        .ok_or(ServiceError::SurveyNotFound)
}

pub async fn get_survey_by_reference(
    repo: &dyn FullRepository,
    reference: &str,
) -> ServiceResult<Survey> {
    repo.get_survey_by_reference(reference)
        .await?
        .ok_or(ServiceError::SurveyNotFound)
}

/// Update the short and long names of the survey matching `reference`.
pub async fn update_survey_names(
    repo: &dyn FullRepository,
    reference: &str,
    short_name: &str,
    long_name: &str,
) -> ServiceResult<()> {
    if repo
        .update_survey_names(reference, short_name, long_name)
        .await?
    {
        info!(reference, "survey names updated");
        Ok(())
    } else {
        Err(ServiceError::SurveyNotFound)
    }
}

/// Create a survey.
///
/// Protocol: resolve the legal basis to its canonical pair (long name
/// preferred over reference), pre-check reference and short-name
/// uniqueness, assign a UUID, insert. The uniqueness pre-checks race with
/// concurrent creators; the database constraints are the backstop, and a
/// conflict from the insert maps onto the same error as the pre-check.
pub async fn create_survey(
    repo: &dyn FullRepository,
    input: ValidatedSurvey,
) -> ServiceResult<Survey> {
    let legal_basis = match (&input.legal_basis, &input.legal_basis_ref) {
        (Some(long_name), _) => repo
            .legal_basis_by_long_name(long_name)
            .await?
            .ok_or_else(|| ServiceError::LegalBasisNotFound(long_name.clone()))?,
        (None, Some(reference)) => repo
            .legal_basis_by_ref(reference)
            .await?
            .ok_or_else(|| ServiceError::LegalBasisNotFound(reference.clone()))?,
        // Unreachable after validation; kept as a defensive domain error
        (None, None) => return Err(ServiceError::LegalBasisNotFound(String::new())),
    };

    if repo.survey_ref_exists(&input.reference).await? {
        return Err(ServiceError::DuplicateReference(input.reference));
    }
    if repo.survey_short_name_exists(&input.short_name).await? {
        return Err(ServiceError::DuplicateShortName(input.short_name));
    }

    let survey = Survey {
        id: Uuid::new_v4(),
        short_name: input.short_name,
        long_name: input.long_name,
        reference: input.reference,
        legal_basis: legal_basis.long_name,
        survey_type: input.survey_type,
        legal_basis_ref: legal_basis.reference,
    };

    match repo.insert_survey(&survey).await {
        Ok(()) => {
            info!(survey_id = %survey.id, reference = %survey.reference, "survey created");
            Ok(survey)
        }
        Err(e @ RepositoryError::Conflict { .. }) => {
            // A concurrent creator won the race after our pre-checks
            Err(conflict_to_duplicate(e, &survey))
        }
        Err(e) => Err(e.into()),
    }
}

fn conflict_to_duplicate(err: RepositoryError, survey: &Survey) -> ServiceError {
    let names_short = err
        .constraint()
        .map(|c| c.contains("shortname"))
        .unwrap_or(false);
    if names_short {
        ServiceError::DuplicateShortName(survey.short_name.clone())
    } else {
        ServiceError::DuplicateReference(survey.reference.clone())
    }
}

/// Selectors for a survey, ascending by name.
///
/// A missing survey is distinguished from a survey with no selectors: the
/// former is an error, the latter an empty list.
pub async fn list_selectors(
    repo: &dyn FullRepository,
    survey_id: Uuid,
) -> ServiceResult<Vec<ClassifierTypeSelectorSummary>> {
    if !repo.survey_exists(survey_id).await? {
        return Err(ServiceError::SurveyNotFound);
    }
    Ok(repo.list_selectors(survey_id).await?)
}

/// A selector with its classifier types, ascending.
///
/// A selector without at least one classifier type is treated as
/// nonexistent.
pub async fn get_selector(
    repo: &dyn FullRepository,
    survey_id: Uuid,
    selector_id: Uuid,
) -> ServiceResult<ClassifierTypeSelector> {
    if !repo.survey_exists(survey_id).await? {
        return Err(ServiceError::SurveyNotFound);
    }

    let selector = repo
        .get_selector_with_types(survey_id, selector_id)
        .await?
        .ok_or(ServiceError::SelectorNotFound)?;

    if selector.classifier_types.is_empty() {
        return Err(ServiceError::SelectorNotFound);
    }

    Ok(selector)
}

/// Create a classifier type selector with its classifier types.
///
/// The selector and every classifier type are inserted atomically; a
/// duplicate selector name is rejected both by the pre-check here and by
/// the re-check the repository runs inside the transaction.
pub async fn create_classifiers(
    repo: &dyn FullRepository,
    survey_id: Uuid,
    input: ValidatedClassifier,
) -> ServiceResult<ClassifierTypeSelector> {
    if !repo.survey_exists(survey_id).await? {
        return Err(ServiceError::SurveyNotFound);
    }

    if repo
        .selector_exists_for_survey(survey_id, &input.name)
        .await?
    {
        return Err(ServiceError::SelectorConflict);
    }

    let selector = ClassifierTypeSelector {
        id: Uuid::new_v4(),
        name: input.name,
        classifier_types: input.classifier_types,
    };

    match repo.create_selector(survey_id, &selector).await? {
        CreateSelectorOutcome::Created => {
            info!(
                survey_id = %survey_id,
                selector_id = %selector.id,
                name = %selector.name,
                "classifier type selector created"
            );
            Ok(selector)
        }
        CreateSelectorOutcome::DuplicateName => Err(ServiceError::SelectorConflict),
    }
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;
