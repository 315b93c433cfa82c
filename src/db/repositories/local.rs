//! In-memory repository implementation.
//!
//! Backs unit tests, router tests, and local development without a
//! database. Semantics mirror the Postgres backend: case-insensitive
//! reference and short-name lookups, exact short-name uniqueness, ordered
//! listings, and duplicate-selector rejection.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::api::{
    ClassifierTypeSelector, ClassifierTypeSelectorSummary, LegalBasis, Survey, SurveyType,
};
use crate::db::repository::{
    ClassifierRepository, CreateSelectorOutcome, RepositoryResult, SurveyRepository,
};

/// Legal bases seeded by the Postgres migration; the local backend carries
/// the same catalog so behavior matches.
const SEED_LEGAL_BASES: [(&str, &str); 5] = [
    ("STA1947", "Statistics of Trade Act 1947"),
    ("STA1947_BEIS", "Statistics of Trade Act 1947 - BEIS"),
    ("GovERD", "Government Resources and Accounts Act 2000"),
    ("Vol", "Voluntary - not statutory"),
    ("Vol_BEIS", "Voluntary Not Stat - BEIS"),
];

#[derive(Debug, Default)]
struct State {
    surveys: Vec<Survey>,
    legal_bases: Vec<LegalBasis>,
    /// Selector together with its owning survey id.
    selectors: Vec<(Uuid, ClassifierTypeSelector)>,
}

/// In-memory repository guarded by a single RwLock.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<State>,
}

impl LocalRepository {
    /// Create an empty repository with the standard legal-basis catalog.
    pub fn new() -> Self {
        Self::with_legal_bases(
            SEED_LEGAL_BASES
                .iter()
                .map(|(reference, long_name)| LegalBasis {
                    reference: reference.to_string(),
                    long_name: long_name.to_string(),
                })
                .collect(),
        )
    }

    /// Create a repository with a custom legal-basis catalog.
    pub fn with_legal_bases(legal_bases: Vec<LegalBasis>) -> Self {
        Self {
            state: RwLock::new(State {
                legal_bases,
                ..Default::default()
            }),
        }
    }
}

#[async_trait]
impl SurveyRepository for LocalRepository {
    async fn list_surveys(&self) -> RepositoryResult<Vec<Survey>> {
        let state = self.state.read();
        let mut surveys = state.surveys.clone();
        surveys.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        Ok(surveys)
    }

    async fn list_surveys_by_type(
        &self,
        survey_type: SurveyType,
    ) -> RepositoryResult<Vec<Survey>> {
        let state = self.state.read();
        let mut surveys: Vec<Survey> = state
            .surveys
            .iter()
            .filter(|s| s.survey_type == survey_type)
            .cloned()
            .collect();
        surveys.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        Ok(surveys)
    }

    async fn get_survey(&self, id: Uuid) -> RepositoryResult<Option<Survey>> {
        let state = self.state.read();
        Ok(state.surveys.iter().find(|s| s.id == id).cloned())
    }

    async fn get_survey_by_short_name(
        &self,
        short_name: &str,
    ) -> RepositoryResult<Option<Survey>> {
        let state = self.state.read();
        Ok(state
            .surveys
            .iter()
            .find(|s| s.short_name.eq_ignore_ascii_case(short_name))
            .cloned())
    }

    async fn get_survey_by_reference(&self, reference: &str) -> RepositoryResult<Option<Survey>> {
        let state = self.state.read();
        Ok(state
            .surveys
            .iter()
            .find(|s| s.reference.eq_ignore_ascii_case(reference))
            .cloned())
    }

    async fn update_survey_names(
        &self,
        reference: &str,
        short_name: &str,
        long_name: &str,
    ) -> RepositoryResult<bool> {
        let mut state = self.state.write();
        match state
            .surveys
            .iter_mut()
            .find(|s| s.reference.eq_ignore_ascii_case(reference))
        {
            Some(survey) => {
                survey.short_name = short_name.to_string();
                survey.long_name = long_name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_survey(&self, survey: &Survey) -> RepositoryResult<()> {
        let mut state = self.state.write();
        if state
            .surveys
            .iter()
            .any(|s| s.reference.eq_ignore_ascii_case(&survey.reference))
        {
            return Err(crate::db::repository::RepositoryError::conflict(
                "duplicate key value violates unique constraint",
                Some("surveyref_lower_idx".to_string()),
            ));
        }
        if state.surveys.iter().any(|s| s.short_name == survey.short_name) {
            return Err(crate::db::repository::RepositoryError::conflict(
                "duplicate key value violates unique constraint",
                Some("survey_shortname_key".to_string()),
            ));
        }
        state.surveys.push(survey.clone());
        Ok(())
    }

    async fn legal_basis_by_long_name(
        &self,
        long_name: &str,
    ) -> RepositoryResult<Option<LegalBasis>> {
        let state = self.state.read();
        Ok(state
            .legal_bases
            .iter()
            .find(|lb| lb.long_name == long_name)
            .cloned())
    }

    async fn legal_basis_by_ref(&self, reference: &str) -> RepositoryResult<Option<LegalBasis>> {
        let state = self.state.read();
        Ok(state
            .legal_bases
            .iter()
            .find(|lb| lb.reference == reference)
            .cloned())
    }

    async fn survey_exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let state = self.state.read();
        Ok(state.surveys.iter().any(|s| s.id == id))
    }

    async fn survey_ref_exists(&self, reference: &str) -> RepositoryResult<bool> {
        let state = self.state.read();
        Ok(state
            .surveys
            .iter()
            .any(|s| s.reference.eq_ignore_ascii_case(reference)))
    }

    async fn survey_short_name_exists(&self, short_name: &str) -> RepositoryResult<bool> {
        let state = self.state.read();
        Ok(state.surveys.iter().any(|s| s.short_name == short_name))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl ClassifierRepository for LocalRepository {
    async fn selector_exists_for_survey(
        &self,
        survey_id: Uuid,
        selector_name: &str,
    ) -> RepositoryResult<bool> {
        let state = self.state.read();
        Ok(state
            .selectors
            .iter()
            .any(|(owner, sel)| *owner == survey_id && sel.name == selector_name))
    }

    async fn create_selector(
        &self,
        survey_id: Uuid,
        selector: &ClassifierTypeSelector,
    ) -> RepositoryResult<CreateSelectorOutcome> {
        let mut state = self.state.write();
        // Same re-check the Postgres backend runs inside its transaction
        if state
            .selectors
            .iter()
            .any(|(owner, sel)| *owner == survey_id && sel.name == selector.name)
        {
            return Ok(CreateSelectorOutcome::DuplicateName);
        }
        state.selectors.push((survey_id, selector.clone()));
        Ok(CreateSelectorOutcome::Created)
    }

    async fn list_selectors(
        &self,
        survey_id: Uuid,
    ) -> RepositoryResult<Vec<ClassifierTypeSelectorSummary>> {
        let state = self.state.read();
        let mut selectors: Vec<ClassifierTypeSelectorSummary> = state
            .selectors
            .iter()
            .filter(|(owner, _)| *owner == survey_id)
            .map(|(_, sel)| ClassifierTypeSelectorSummary {
                id: sel.id,
                name: sel.name.clone(),
            })
            .collect();
        selectors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(selectors)
    }

    async fn get_selector_with_types(
        &self,
        survey_id: Uuid,
        selector_id: Uuid,
    ) -> RepositoryResult<Option<ClassifierTypeSelector>> {
        let state = self.state.read();
        Ok(state
            .selectors
            .iter()
            .find(|(owner, sel)| *owner == survey_id && sel.id == selector_id)
            .map(|(_, sel)| {
                let mut selector = sel.clone();
                selector.classifier_types.sort();
                selector
            }))
    }
}
