//! Repository error type behavior: context building, retryability and
//! constraint reporting.

use survey_service::db::repository::{ErrorContext, RepositoryError};

#[test]
fn context_builder_accumulates_fields() {
    let context = ErrorContext::new("insert_survey")
        .with_entity("survey")
        .with_entity_id("0123")
        .with_details("duplicate reference");

    assert_eq!(context.operation.as_deref(), Some("insert_survey"));
    assert_eq!(context.entity.as_deref(), Some("survey"));
    assert_eq!(context.entity_id.as_deref(), Some("0123"));
    assert_eq!(context.details.as_deref(), Some("duplicate reference"));
    assert!(!context.retryable);
}

#[test]
fn context_display_renders_all_parts() {
    let context = ErrorContext::new("get_survey")
        .with_entity("survey")
        .retryable();
    let rendered = context.to_string();
    assert!(rendered.contains("operation=get_survey"), "{rendered}");
    assert!(rendered.contains("entity=survey"), "{rendered}");
    assert!(rendered.contains("retryable=true"), "{rendered}");
}

#[test]
fn connection_errors_are_retryable() {
    let err = RepositoryError::connection("pool exhausted");
    assert!(err.is_retryable());
}

#[test]
fn query_errors_are_not_retryable_by_default() {
    let err = RepositoryError::query("syntax error");
    assert!(!err.is_retryable());
}

#[test]
fn not_found_is_never_retryable() {
    let err = RepositoryError::not_found("no such survey");
    assert!(!err.is_retryable());
}

#[test]
fn conflict_carries_constraint_name() {
    let err = RepositoryError::conflict(
        "duplicate key value",
        Some("surveyref_lower_idx".to_string()),
    );
    assert_eq!(err.constraint(), Some("surveyref_lower_idx"));
    assert!(!err.is_retryable());

    let err = RepositoryError::conflict("duplicate key value", None);
    assert_eq!(err.constraint(), None);
}

#[test]
fn constraint_is_none_for_other_variants() {
    assert_eq!(RepositoryError::query("boom").constraint(), None);
    assert_eq!(RepositoryError::internal("boom").constraint(), None);
}

#[test]
fn with_operation_updates_context() {
    let err = RepositoryError::query("boom").with_operation("list_surveys");
    assert_eq!(err.context().operation.as_deref(), Some("list_surveys"));
}

#[test]
fn display_includes_message_and_context() {
    let err = RepositoryError::query_with_context(
        "relation does not exist",
        ErrorContext::new("list_surveys").with_entity("survey"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("Query error: relation does not exist"), "{rendered}");
    assert!(rendered.contains("operation=list_surveys"), "{rendered}");
}
