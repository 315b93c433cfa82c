//! Tests for the core domain types.

use super::*;

#[test]
fn survey_type_parses_case_insensitively() {
    assert_eq!("census".parse::<SurveyType>().unwrap(), SurveyType::Census);
    assert_eq!("BUSINESS".parse::<SurveyType>().unwrap(), SurveyType::Business);
    assert_eq!("Social".parse::<SurveyType>().unwrap(), SurveyType::Social);
    assert_eq!(" social ".parse::<SurveyType>().unwrap(), SurveyType::Social);
}

#[test]
fn survey_type_rejects_unknown_values() {
    let err = "Invalid".parse::<SurveyType>().unwrap_err();
    assert_eq!(err, UnknownSurveyType("Invalid".to_string()));
}

#[test]
fn survey_type_renders_canonically() {
    assert_eq!(SurveyType::Census.to_string(), "Census");
    assert_eq!(SurveyType::Business.as_str(), "Business");
    assert_eq!(SurveyType::Social.as_str(), "Social");
}

#[test]
fn survey_serializes_with_wire_field_names() {
    let survey = Survey {
        id: Uuid::nil(),
        short_name: "RSI".to_string(),
        long_name: "Retail Sales Index".to_string(),
        reference: "0123".to_string(),
        legal_basis: "Statistics of Trade Act 1947".to_string(),
        survey_type: SurveyType::Business,
        legal_basis_ref: "STA1947".to_string(),
    };

    let value = serde_json::to_value(&survey).unwrap();
    assert_eq!(value["shortName"], "RSI");
    assert_eq!(value["longName"], "Retail Sales Index");
    assert_eq!(value["surveyRef"], "0123");
    assert_eq!(value["legalBasis"], "Statistics of Trade Act 1947");
    assert_eq!(value["legalBasisRef"], "STA1947");
    assert_eq!(value["surveyType"], "Business");
}

#[test]
fn selector_serializes_classifier_types() {
    let selector = ClassifierTypeSelector {
        id: Uuid::nil(),
        name: "COLLECTION_INSTRUMENT".to_string(),
        classifier_types: vec!["COLLECTION_INSTRUMENT".to_string(), "RU_REF".to_string()],
    };

    let value = serde_json::to_value(&selector).unwrap();
    assert_eq!(value["name"], "COLLECTION_INSTRUMENT");
    assert_eq!(value["classifierTypes"][1], "RU_REF");
}

#[test]
fn rest_error_carries_code_and_unix_timestamp() {
    let err = RestError::not_found("Survey not found");
    assert_eq!(err.code, "404");
    assert_eq!(err.message, "Survey not found");
    assert!(err.timestamp.parse::<i64>().unwrap() > 0);
}
