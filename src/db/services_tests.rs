//! Tests for the domain service layer against the in-memory repository.

use super::*;
use crate::api::SurveyType;
use crate::db::repositories::LocalRepository;
use crate::db::repository::{ClassifierRepository, SurveyRepository};
use crate::services::validation::{ValidatedClassifier, ValidatedSurvey};

fn survey_input(short_name: &str, reference: &str) -> ValidatedSurvey {
    ValidatedSurvey {
        short_name: short_name.to_string(),
        long_name: format!("{} long name", short_name),
        reference: reference.to_string(),
        survey_type: SurveyType::Business,
        legal_basis: Some("Statistics of Trade Act 1947".to_string()),
        legal_basis_ref: None,
    }
}

fn classifier_input(name: &str, types: &[&str]) -> ValidatedClassifier {
    ValidatedClassifier {
        name: name.to_string(),
        classifier_types: types.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
async fn create_survey_adopts_canonical_legal_basis_pair() {
    let repo = LocalRepository::new();

    let created = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();
    assert_eq!(created.legal_basis, "Statistics of Trade Act 1947");
    assert_eq!(created.legal_basis_ref, "STA1947");
    assert_eq!(created.survey_type, SurveyType::Business);
}

#[tokio::test]
async fn create_survey_resolves_legal_basis_by_ref_when_long_name_absent() {
    let repo = LocalRepository::new();
    let mut input = survey_input("RSI", "0123");
    input.legal_basis = None;
    input.legal_basis_ref = Some("Vol".to_string());

    let created = create_survey(&repo, input).await.unwrap();
    assert_eq!(created.legal_basis, "Voluntary - not statutory");
    assert_eq!(created.legal_basis_ref, "Vol");
}

#[tokio::test]
async fn create_survey_rejects_unknown_legal_basis() {
    let repo = LocalRepository::with_legal_bases(Vec::new());

    let err = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Legal basis Statistics of Trade Act 1947 does not exist"
    );
}

#[tokio::test]
async fn create_survey_round_trips_through_get() {
    let repo = LocalRepository::new();

    let created = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();
    let fetched = get_survey(&repo, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_survey_rejects_duplicate_reference_case_insensitively() {
    let repo = LocalRepository::new();
    create_survey(&repo, survey_input("RSI", "0123x")).await.unwrap();

    let err = create_survey(&repo, survey_input("MWSS", "0123X"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Survey with reference 0123X already exists");
}

#[tokio::test]
async fn create_survey_rejects_duplicate_short_name() {
    let repo = LocalRepository::new();
    create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();

    let err = create_survey(&repo, survey_input("RSI", "0124"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The survey with Abbreviation RSI already exists"
    );
}

#[tokio::test]
async fn concurrent_conflict_from_insert_maps_to_duplicate_reference() {
    // The repository constraint is the backstop when the pre-check races
    let repo = LocalRepository::new();
    let survey = Survey {
        id: Uuid::new_v4(),
        short_name: "RSI".to_string(),
        long_name: "Retail Sales Index".to_string(),
        reference: "0123".to_string(),
        legal_basis: "Statistics of Trade Act 1947".to_string(),
        survey_type: SurveyType::Business,
        legal_basis_ref: "STA1947".to_string(),
    };
    repo.insert_survey(&survey).await.unwrap();

    let err = repo
        .insert_survey(&Survey {
            id: Uuid::new_v4(),
            short_name: "MWSS".to_string(),
            ..survey.clone()
        })
        .await
        .unwrap_err();
    let mapped = conflict_to_duplicate(err, &survey);
    assert!(matches!(mapped, ServiceError::DuplicateReference(ref r) if r == "0123"));
}

#[tokio::test]
async fn update_survey_names_matches_reference_case_insensitively() {
    let repo = LocalRepository::new();
    let created = create_survey(&repo, survey_input("RSI", "0123A")).await.unwrap();

    update_survey_names(&repo, "0123a", "NewShort", "New long name")
        .await
        .unwrap();

    let fetched = get_survey(&repo, created.id).await.unwrap();
    assert_eq!(fetched.short_name, "NewShort");
    assert_eq!(fetched.long_name, "New long name");
    // The reference itself is untouched
    assert_eq!(fetched.reference, "0123A");
}

#[tokio::test]
async fn update_survey_names_reports_missing_survey() {
    let repo = LocalRepository::new();
    let err = update_survey_names(&repo, "9999", "S", "L").await.unwrap_err();
    assert!(matches!(err, ServiceError::SurveyNotFound));
}

#[tokio::test]
async fn list_surveys_sorts_by_short_name() {
    let repo = LocalRepository::new();
    create_survey(&repo, survey_input("MWSS", "0100")).await.unwrap();
    create_survey(&repo, survey_input("ASHE", "0200")).await.unwrap();
    create_survey(&repo, survey_input("RSI", "0300")).await.unwrap();

    let surveys = list_surveys(&repo).await.unwrap();
    let names: Vec<&str> = surveys.iter().map(|s| s.short_name.as_str()).collect();
    assert_eq!(names, vec!["ASHE", "MWSS", "RSI"]);
}

#[tokio::test]
async fn list_surveys_by_type_filters_exactly() {
    let repo = LocalRepository::new();
    create_survey(&repo, survey_input("MWSS", "0100")).await.unwrap();
    let mut social = survey_input("LFS", "0200");
    social.survey_type = SurveyType::Social;
    create_survey(&repo, social).await.unwrap();

    let surveys = list_surveys_by_type(&repo, SurveyType::Social).await.unwrap();
    assert_eq!(surveys.len(), 1);
    assert_eq!(surveys[0].short_name, "LFS");
}

#[tokio::test]
async fn lookup_by_short_name_and_reference_are_case_insensitive() {
    let repo = LocalRepository::new();
    let created = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();

    assert_eq!(
        get_survey_by_short_name(&repo, "rsi").await.unwrap().id,
        created.id
    );
    assert_eq!(
        get_survey_by_reference(&repo, "0123").await.unwrap().id,
        created.id
    );
}

#[tokio::test]
async fn list_selectors_distinguishes_missing_survey_from_empty_list() {
    let repo = LocalRepository::new();
    let created = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();

    let err = list_selectors(&repo, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::SurveyNotFound));

    let selectors = list_selectors(&repo, created.id).await.unwrap();
    assert!(selectors.is_empty());
}

#[tokio::test]
async fn create_classifiers_round_trips_with_sorted_types() {
    let repo = LocalRepository::new();
    let survey = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();

    let created = create_classifiers(
        &repo,
        survey.id,
        classifier_input("COLLECTION_INSTRUMENT", &["RU_REF", "COLLECTION_INSTRUMENT"]),
    )
    .await
    .unwrap();

    let fetched = get_selector(&repo, survey.id, created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "COLLECTION_INSTRUMENT");
    assert_eq!(
        fetched.classifier_types,
        vec!["COLLECTION_INSTRUMENT".to_string(), "RU_REF".to_string()]
    );
}

#[tokio::test]
async fn create_classifiers_rejects_missing_survey() {
    let repo = LocalRepository::new();
    let err = create_classifiers(&repo, Uuid::new_v4(), classifier_input("SEL", &["A"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SurveyNotFound));
}

#[tokio::test]
async fn create_classifiers_rejects_duplicate_selector_name() {
    let repo = LocalRepository::new();
    let survey = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();
    create_classifiers(&repo, survey.id, classifier_input("SEL", &["A"]))
        .await
        .unwrap();

    let err = create_classifiers(&repo, survey.id, classifier_input("SEL", &["B"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SelectorConflict));
}

#[tokio::test]
async fn selector_names_are_scoped_per_survey() {
    let repo = LocalRepository::new();
    let first = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();
    let second = create_survey(&repo, survey_input("MWSS", "0124")).await.unwrap();

    create_classifiers(&repo, first.id, classifier_input("SEL", &["A"]))
        .await
        .unwrap();
    // Same name on a different survey is allowed
    create_classifiers(&repo, second.id, classifier_input("SEL", &["A"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn get_selector_requires_both_parents() {
    let repo = LocalRepository::new();
    let survey = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();
    let selector = create_classifiers(&repo, survey.id, classifier_input("SEL", &["A"]))
        .await
        .unwrap();

    let err = get_selector(&repo, Uuid::new_v4(), selector.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::SurveyNotFound));

    let err = get_selector(&repo, survey.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::SelectorNotFound));
}

#[tokio::test]
async fn selector_without_types_is_treated_as_absent() {
    let repo = LocalRepository::new();
    let survey = create_survey(&repo, survey_input("RSI", "0123")).await.unwrap();

    // Bypass the service to simulate a selector with no child rows
    let empty = ClassifierTypeSelector {
        id: Uuid::new_v4(),
        name: "EMPTY".to_string(),
        classifier_types: Vec::new(),
    };
    repo.create_selector(survey.id, &empty).await.unwrap();

    let err = get_selector(&repo, survey.id, empty.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::SelectorNotFound));
}
