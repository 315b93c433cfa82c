//! Abstract repository interface for the survey schema.
//!
//! Domain outcomes are tagged at this boundary: single-row lookups return
//! `Option<T>` rather than a driver sentinel, presence checks return `bool`,
//! and unique-constraint violations surface as
//! [`RepositoryError::Conflict`]. Callers never see surrogate integer keys;
//! those stay inside the backends.

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::{
    ClassifierTypeSelector, ClassifierTypeSelectorSummary, LegalBasis, Survey, SurveyType,
};

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Outcome of a transactional selector creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateSelectorOutcome {
    /// The selector and all of its classifier types were committed.
    Created,
    /// A selector with the same name already exists on the survey; the
    /// transaction was rolled back.
    DuplicateName,
}

/// Read and write operations over surveys and the legal-basis catalog.
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// All surveys, sorted ascending by short name.
    async fn list_surveys(&self) -> RepositoryResult<Vec<Survey>>;

    /// Surveys of the given type, sorted ascending by short name.
    async fn list_surveys_by_type(&self, survey_type: SurveyType)
        -> RepositoryResult<Vec<Survey>>;

    async fn get_survey(&self, id: Uuid) -> RepositoryResult<Option<Survey>>;

    /// Case-insensitive short-name lookup.
    async fn get_survey_by_short_name(&self, short_name: &str)
        -> RepositoryResult<Option<Survey>>;

    /// Case-insensitive reference lookup.
    async fn get_survey_by_reference(&self, reference: &str) -> RepositoryResult<Option<Survey>>;

    /// Update both names on the survey whose reference matches
    /// case-insensitively. Returns false when no row matched. No other
    /// columns are touched.
    async fn update_survey_names(
        &self,
        reference: &str,
        short_name: &str,
        long_name: &str,
    ) -> RepositoryResult<bool>;

    /// Insert a fully-resolved survey row.
    ///
    /// Returns [`RepositoryError::Conflict`] if a unique constraint on the
    /// reference or short name is violated.
    async fn insert_survey(&self, survey: &Survey) -> RepositoryResult<()>;

    async fn legal_basis_by_long_name(&self, long_name: &str)
        -> RepositoryResult<Option<LegalBasis>>;

    async fn legal_basis_by_ref(&self, reference: &str) -> RepositoryResult<Option<LegalBasis>>;

    /// Presence check by survey id.
    async fn survey_exists(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Case-insensitive presence check on the survey reference.
    async fn survey_ref_exists(&self, reference: &str) -> RepositoryResult<bool>;

    /// Exact-match presence check on the short name.
    async fn survey_short_name_exists(&self, short_name: &str) -> RepositoryResult<bool>;

    /// Cheap connectivity probe, used by startup back-off.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Operations over classifier type selectors and their classifier types.
#[async_trait]
pub trait ClassifierRepository: Send + Sync {
    /// Exact-match presence check for a selector name, scoped to one survey.
    async fn selector_exists_for_survey(
        &self,
        survey_id: Uuid,
        selector_name: &str,
    ) -> RepositoryResult<bool>;

    /// Create a selector and its classifier types as one transaction.
    ///
    /// The duplicate-name check is re-run inside the transaction; on a
    /// duplicate the transaction is rolled back and
    /// [`CreateSelectorOutcome::DuplicateName`] is returned. Classifier
    /// types are inserted in the order supplied.
    async fn create_selector(
        &self,
        survey_id: Uuid,
        selector: &ClassifierTypeSelector,
    ) -> RepositoryResult<CreateSelectorOutcome>;

    /// Selectors attached to a survey, sorted ascending by name.
    ///
    /// Callers must have verified that the survey exists; an unknown survey
    /// id yields an empty list here, not an error.
    async fn list_selectors(
        &self,
        survey_id: Uuid,
    ) -> RepositoryResult<Vec<ClassifierTypeSelectorSummary>>;

    /// A selector with its classifier types sorted ascending, or None when
    /// the selector does not belong to the survey.
    async fn get_selector_with_types(
        &self,
        survey_id: Uuid,
        selector_id: Uuid,
    ) -> RepositoryResult<Option<ClassifierTypeSelector>>;
}

/// Combined interface implemented by every backend.
pub trait FullRepository: SurveyRepository + ClassifierRepository {}

impl<T: SurveyRepository + ClassifierRepository> FullRepository for T {}
